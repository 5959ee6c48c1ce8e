use thiserror::Error;

/// Errors raised by the non-arithmetic surfaces of the engine.
///
/// Derived-stat and scouting-score arithmetic never fails: zero denominators
/// yield zero. Only parsing, configuration and query validation can error.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Position {position} is not valid for {group}")]
    PositionMismatch { position: String, group: &'static str },

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Query field is required: {0}")]
    MissingQueryField(&'static str),

    #[error("Invalid scouting config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for StatsError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            StatsError::Deserialization(err.to_string())
        } else {
            StatsError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
