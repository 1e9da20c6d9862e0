//! Calendar-month grouping and dispersion helpers shared by the scorers.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::{Decimal, MathematicalOps};

use crate::types::Transaction;

/// Year-month key for calendar grouping.
pub type MonthKey = (i32, u32);

/// Calendar month a ledger entry falls in.
pub fn month_key(transaction: &Transaction) -> MonthKey {
    (transaction.date.year(), transaction.date.month())
}

/// Group ledger entries by calendar month, preserving input order within
/// each month.
pub fn group_by_month(transactions: &[Transaction]) -> BTreeMap<MonthKey, Vec<&Transaction>> {
    let mut groups: BTreeMap<MonthKey, Vec<&Transaction>> = BTreeMap::new();
    for t in transactions {
        groups.entry(month_key(t)).or_default().push(t);
    }
    groups
}

/// Per-month entry counts, in calendar order.
pub fn monthly_counts(transactions: &[Transaction]) -> Vec<Decimal> {
    group_by_month(transactions)
        .values()
        .map(|month| Decimal::from(month.len() as u64))
        .collect()
}

/// How evenly a per-month count distribution is spread: 1 minus the
/// coefficient of variation (population standard deviation over mean,
/// with the mean treated as 1 when it is zero). No months yields zero.
/// Can go negative when the spread exceeds the mean.
pub fn consistency(counts: &[Decimal]) -> Decimal {
    if counts.is_empty() {
        return Decimal::ZERO;
    }
    let n = Decimal::from(counts.len() as u64);
    let mean = counts.iter().copied().sum::<Decimal>() / n;
    let variance = counts
        .iter()
        .map(|c| (*c - mean) * (*c - mean))
        .sum::<Decimal>()
        / n;
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);
    let denom = if mean.is_zero() { Decimal::ONE } else { mean };
    Decimal::ONE - std_dev / denom
}
