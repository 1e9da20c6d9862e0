pub mod error;
pub mod scoring;
pub mod stats;
pub mod types;

pub use error::LedgerScoreError;
pub use types::*;

/// Standard result type for all ledger-score operations
pub type LedgerScoreResult<T> = Result<T, LedgerScoreError>;
