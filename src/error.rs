use thiserror::Error;

/// Failure taxonomy of the appointment store. Everything user-recoverable is
/// `Validation`; everything else aborts the current operation.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A date field that could not be parsed. The record is not persisted.
    #[error("invalid {field}: {value:?} is not a date in YYYY-MM-DD form")]
    Validation { field: &'static str, value: String },

    /// The underlying SQLite store could not be opened or a statement failed.
    #[error("appointment store unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// A CSV backup that does not match the expected layout. The store is
    /// left untouched.
    #[error("malformed CSV backup: {0}")]
    MalformedInput(String),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}
