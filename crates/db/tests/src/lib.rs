//! Backend-agnostic conformance tests for the storage interfaces.
//!
//! Each backend instantiates the suite with its own setup expression through
//! the exported macros.

pub mod batch_tests;
