//! Credit scoring pipeline: trailing-window filter, four component
//! scorers, weighted aggregation, classification, and recommendations.
//!
//! Every stage is a pure function of its inputs. The entry point takes an
//! explicit reference instant, so two calls with identical inputs produce
//! identical results.

pub mod activity;
pub mod aggregate;
pub mod behavior;
pub mod cash_flow;
pub mod recommend;
pub mod stability;
pub mod window;

use std::time::Instant;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{
    with_metadata, AccountProfile, ComputationOutput, CreditScoreResult, ScoreBreakdown,
    Transaction,
};
use crate::{LedgerScoreError, LedgerScoreResult};

/// Input for a scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScoreInput {
    pub profile: AccountProfile,
    /// Transaction history, expected in ascending date order.
    pub transactions: Vec<Transaction>,
    /// Explicit "now" for the trailing window. Callers supply the real
    /// current time in production and a fixed instant in tests.
    pub reference_time: DateTime<Utc>,
}

/// Score an account from its ledger.
///
/// Preconditions on the caller: transactions in ascending date order
/// (violations are repaired with a warning), and any minimum-history
/// policy enforced before calling — an empty window scores at the floor
/// rather than failing.
pub fn calculate_credit_score(
    input: &CreditScoreInput,
) -> LedgerScoreResult<ComputationOutput<CreditScoreResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let mut window = window::filter_window(&input.transactions, input.reference_time)?;

    // The volume-growth split assumes chronological order. The repair
    // sort costs an extra O(n log n) pass, so it only runs when the
    // caller's ordering guarantee turns out to be broken.
    if !is_sorted_by_date(&window) {
        warnings.push(
            "transactions were not in ascending date order; sorted before scoring".to_string(),
        );
        window.sort_by_key(|t| t.date);
    }

    let breakdown = if window.is_empty() {
        warnings.push(format!(
            "no transactions within the {}-month window; scoring at the floor",
            window::WINDOW_MONTHS
        ));
        ScoreBreakdown {
            transaction: 0,
            cash_flow: 0,
            stability: 0,
            behavior: 0,
        }
    } else {
        ScoreBreakdown {
            transaction: activity::score_activity(&window),
            cash_flow: cash_flow::score_cash_flow(&window),
            stability: stability::score_stability(&input.profile, &window),
            behavior: behavior::score_behavior(&window),
        }
    };

    let raw = aggregate::raw_score(&breakdown);
    let score = aggregate::scale_score(raw);
    let result = CreditScoreResult {
        score,
        grade: aggregate::grade_for(score),
        risk_level: aggregate::risk_level_for(score),
        recommendations: recommend::generate_recommendations(&breakdown, &input.profile),
        breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "window_months": window::WINDOW_MONTHS,
        "weights": {
            "transaction": aggregate::WEIGHT_TRANSACTION,
            "cash_flow": aggregate::WEIGHT_CASH_FLOW,
            "stability": aggregate::WEIGHT_STABILITY,
            "behavior": aggregate::WEIGHT_BEHAVIOR,
        },
        "scale": format!("{}-{}", aggregate::MIN_SCORE, aggregate::MAX_SCORE),
        "late_payment_detection": "disabled until ledger entries carry due dates",
    });

    Ok(with_metadata(
        "Ledger-based alternative credit score (weighted component model)",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

fn validate_input(input: &CreditScoreInput) -> LedgerScoreResult<()> {
    for (i, t) in input.transactions.iter().enumerate() {
        if t.amount < Decimal::ZERO {
            return Err(LedgerScoreError::InvalidInput {
                field: format!("transactions[{i}].amount"),
                reason: "Transaction amounts must be non-negative.".into(),
            });
        }
    }
    Ok(())
}

fn is_sorted_by_date(transactions: &[Transaction]) -> bool {
    transactions.windows(2).all(|pair| pair[0].date <= pair[1].date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::types::TransactionKind;

    fn tx(month: u32, day: u32, amount: Decimal) -> Transaction {
        Transaction {
            date: Utc.with_ymd_and_hms(2025, month, day, 0, 0, 0).unwrap(),
            kind: TransactionKind::Credit,
            amount,
            category: "sales".to_string(),
            balance: dec!(1_000),
        }
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_negative_amount_rejected_at_boundary() {
        let input = CreditScoreInput {
            profile: AccountProfile::default(),
            transactions: vec![tx(3, 1, dec!(-10))],
            reference_time: reference(),
        };
        let err = calculate_credit_score(&input).unwrap_err();
        match err {
            LedgerScoreError::InvalidInput { field, .. } => {
                assert_eq!(field, "transactions[0].amount");
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_unsorted_input_warns_and_repairs() {
        let sorted = CreditScoreInput {
            profile: AccountProfile::default(),
            transactions: vec![tx(2, 1, dec!(100)), tx(3, 1, dec!(300))],
            reference_time: reference(),
        };
        let shuffled = CreditScoreInput {
            transactions: vec![tx(3, 1, dec!(300)), tx(2, 1, dec!(100))],
            ..sorted.clone()
        };

        let clean = calculate_credit_score(&sorted).unwrap();
        let repaired = calculate_credit_score(&shuffled).unwrap();

        assert!(clean.warnings.is_empty());
        assert!(repaired.warnings.iter().any(|w| w.contains("date order")));
        assert_eq!(clean.result, repaired.result);
    }

    #[test]
    fn test_empty_window_scores_floor() {
        let input = CreditScoreInput {
            profile: AccountProfile::default(),
            transactions: vec![],
            reference_time: reference(),
        };
        let out = calculate_credit_score(&input).unwrap();
        assert_eq!(out.result.score, 300);
        assert!(out.warnings.iter().any(|w| w.contains("window")));
    }

    #[test]
    fn test_metadata_populated() {
        let input = CreditScoreInput {
            profile: AccountProfile::default(),
            transactions: vec![tx(4, 1, dec!(100))],
            reference_time: reference(),
        };
        let out = calculate_credit_score(&input).unwrap();
        assert!(out.methodology.contains("credit score"));
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
        assert_eq!(out.assumptions["window_months"], 6);
    }
}
