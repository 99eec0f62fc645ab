//! FILENAME: src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransposeError {
    /// Emission was requested before any record was collected. There is
    /// no row to seed the property universe from, so this is a usage
    /// error rather than an empty result.
    #[error("no records supplied: collect at least one record before emitting rows")]
    NoRecords,
}
