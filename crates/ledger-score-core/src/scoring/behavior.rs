//! Behaviour component: starts from a full score, deducts for overdrafts
//! and late loan repayments, and rewards a saving habit.

use rust_decimal::Decimal;

use crate::types::Transaction;

/// Category marking a loan repayment entry.
pub const LOAN_REPAYMENT_CATEGORY: &str = "loan_repayment";

/// Categories counted towards the savings-habit bonus.
pub const SAVINGS_CATEGORIES: [&str; 2] = ["savings", "investment"];

/// Late-payment check for loan repayments.
///
/// Ledger entries do not carry a due date yet, so every repayment is
/// treated as on time. This is the single place to wire a real due-date
/// comparison without touching the scorer's contract.
pub fn is_late_payment(_transaction: &Transaction) -> bool {
    false
}

/// Score financial behaviour, starting at 100 and clamped to [0, 100].
pub fn score_behavior(transactions: &[Transaction]) -> u8 {
    let mut score: i32 = 100;

    let overdrafts = transactions
        .iter()
        .filter(|t| t.balance < Decimal::ZERO)
        .count();
    score -= match overdrafts {
        o if o > 5 => 30,
        o if o > 2 => 15,
        o if o > 0 => 5,
        _ => 0,
    };

    let late_payments = transactions
        .iter()
        .filter(|t| t.category == LOAN_REPAYMENT_CATEGORY && is_late_payment(t))
        .count();
    score -= match late_payments {
        l if l > 3 => 40,
        l if l > 1 => 20,
        l if l > 0 => 10,
        _ => 0,
    };

    let savings = transactions
        .iter()
        .filter(|t| SAVINGS_CATEGORIES.contains(&t.category.as_str()))
        .count();
    score += match savings {
        s if s >= 10 => 30,
        s if s >= 5 => 15,
        _ => 0,
    };

    score.clamp(0, 100) as u8
}
