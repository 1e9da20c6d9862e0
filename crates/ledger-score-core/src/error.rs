use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerScoreError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LedgerScoreError {
    fn from(e: serde_json::Error) -> Self {
        LedgerScoreError::SerializationError(e.to_string())
    }
}
