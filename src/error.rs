//! Error types for timetable operations.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid time string: {0:?}")]
    Parse(String),

    #[error("Minutes out of range for a time of day: {0}")]
    OutOfRange(i64),
}

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Invalid scheduling input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error(transparent)]
    Time(#[from] TimeError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {namespace}: {source}")]
    Io {
        namespace: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt data in {namespace}: {source}")]
    Json {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
pub type StorageResult<T> = std::result::Result<T, StorageError>;
