//! Transaction Activity component: rewards steady transaction volume,
//! growth in transacted amounts, and category diversity.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::scoring::window::WINDOW_MONTHS;
use crate::types::Transaction;

/// Score the windowed history on activity. Three additive buckets
/// (monthly count, volume growth, category diversity) capped at 100.
pub fn score_activity(transactions: &[Transaction]) -> u8 {
    let mut score: u32 = 0;

    let avg_per_month =
        Decimal::from(transactions.len() as u64) / Decimal::from(WINDOW_MONTHS);
    score += if avg_per_month >= dec!(50) {
        40
    } else if avg_per_month >= dec!(30) {
        30
    } else if avg_per_month >= dec!(15) {
        20
    } else if avg_per_month >= dec!(5) {
        10
    } else {
        0
    };

    let growth = volume_growth(transactions);
    score += if growth > dec!(0.2) {
        30
    } else if growth > dec!(0.1) {
        20
    } else if growth > Decimal::ZERO {
        10
    } else {
        0
    };

    let categories: HashSet<&str> = transactions.iter().map(|t| t.category.as_str()).collect();
    score += match categories.len() {
        n if n >= 5 => 30,
        n if n >= 3 => 20,
        n if n >= 2 => 10,
        _ => 0,
    };

    score.min(100) as u8
}

/// Growth in transacted volume between the first and second halves of the
/// chronologically ordered window: (second − first) / max(first, 1).
///
/// The split is by index at n/2, with the first half never empty, so a
/// single entry reads as shrinking volume. Callers must supply entries in
/// ascending date order for the halves to be meaningful.
pub fn volume_growth(transactions: &[Transaction]) -> Decimal {
    if transactions.is_empty() {
        return Decimal::ZERO;
    }
    let half = (transactions.len() / 2).max(1);
    let (first, second) = transactions.split_at(half);
    let first_volume: Decimal = first.iter().map(|t| t.amount).sum();
    let second_volume: Decimal = second.iter().map(|t| t.amount).sum();
    (second_volume - first_volume) / first_volume.max(Decimal::ONE)
}
