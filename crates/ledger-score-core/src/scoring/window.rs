use chrono::{DateTime, Months, Utc};

use crate::error::LedgerScoreError;
use crate::types::Transaction;
use crate::LedgerScoreResult;

/// Trailing calendar months of history considered for scoring.
pub const WINDOW_MONTHS: u32 = 6;

/// Restrict `transactions` to the trailing six calendar months before
/// `reference_time`. Order is preserved and an empty input yields an
/// empty window; the minimum-history policy lives with the caller.
///
/// The reference instant is an explicit parameter rather than a wall
/// clock read so results are reproducible.
pub fn filter_window(
    transactions: &[Transaction],
    reference_time: DateTime<Utc>,
) -> LedgerScoreResult<Vec<Transaction>> {
    let cutoff = reference_time
        .checked_sub_months(Months::new(WINDOW_MONTHS))
        .ok_or_else(|| {
            LedgerScoreError::DateError(format!(
                "cannot step back {WINDOW_MONTHS} months from {reference_time}"
            ))
        })?;
    Ok(transactions
        .iter()
        .filter(|t| t.date >= cutoff)
        .cloned()
        .collect())
}
