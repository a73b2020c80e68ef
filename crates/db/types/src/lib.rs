//! Storage interfaces for batch records and the event log.

mod errors;
pub mod traits;

pub use errors::{DbError, DbResult};
pub use traits::{BatchRecordDatabase, RollupEventDatabase};
