//! Utilities shared by the rollup binaries.

pub mod logging;
