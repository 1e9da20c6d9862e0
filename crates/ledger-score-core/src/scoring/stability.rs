//! Stability component: account age and how regular the monthly
//! transaction pattern is.

use rust_decimal_macros::dec;

use crate::stats;
use crate::types::{AccountProfile, Transaction};

/// Score account age and monthly regularity. Two additive buckets capped
/// at 100.
pub fn score_stability(profile: &AccountProfile, transactions: &[Transaction]) -> u8 {
    let mut score: u32 = 0;

    score += match profile.age_months() {
        a if a >= 24 => 40,
        a if a >= 12 => 30,
        a if a >= 6 => 20,
        a if a >= 3 => 10,
        _ => 0,
    };

    let consistency = stats::consistency(&stats::monthly_counts(transactions));
    score += if consistency >= dec!(0.8) {
        60
    } else if consistency >= dec!(0.6) {
        40
    } else if consistency >= dec!(0.4) {
        20
    } else {
        0
    };

    score.min(100) as u8
}
