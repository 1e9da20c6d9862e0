//! Cash Flow component: income over expenses, negative-balance months,
//! and absolute income level.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::scoring::window::WINDOW_MONTHS;
use crate::stats;
use crate::types::{Money, Transaction, TransactionKind};

/// Score the windowed history on cash flow. Three additive buckets
/// capped at 100.
pub fn score_cash_flow(transactions: &[Transaction]) -> u8 {
    let mut score: u32 = 0;

    let total_income: Money = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Credit)
        .map(|t| t.amount)
        .sum();
    let total_expenses: Money = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Debit)
        .map(|t| t.amount)
        .sum();

    // Expense floor of 1 guards the all-credit ledger.
    let ratio = total_income / total_expenses.max(Decimal::ONE);
    score += if ratio >= dec!(1.5) {
        50
    } else if ratio >= dec!(1.3) {
        40
    } else if ratio >= dec!(1.15) {
        30
    } else if ratio >= dec!(1.0) {
        20
    } else {
        0
    };

    score += match negative_balance_months(transactions) {
        0 => 30,
        1 => 15,
        _ => 0,
    };

    let avg_monthly_income = total_income / Decimal::from(WINDOW_MONTHS);
    score += if avg_monthly_income >= dec!(500_000) {
        20
    } else if avg_monthly_income >= dec!(200_000) {
        15
    } else if avg_monthly_income >= dec!(100_000) {
        10
    } else if avg_monthly_income >= dec!(50_000) {
        5
    } else {
        0
    };

    score.min(100) as u8
}

/// Distinct calendar months containing at least one negative-balance
/// entry.
pub fn negative_balance_months(transactions: &[Transaction]) -> usize {
    stats::group_by_month(transactions)
        .values()
        .filter(|month| month.iter().any(|t| t.balance < Decimal::ZERO))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn tx(month: u32, kind: TransactionKind, amount: Decimal, balance: Decimal) -> Transaction {
        Transaction {
            date: Utc.with_ymd_and_hms(2025, month, 10, 0, 0, 0).unwrap(),
            kind,
            amount,
            category: "sales".to_string(),
            balance,
        }
    }

    fn credit(month: u32, amount: Decimal) -> Transaction {
        tx(month, TransactionKind::Credit, amount, dec!(10_000))
    }

    fn debit(month: u32, amount: Decimal) -> Transaction {
        tx(month, TransactionKind::Debit, amount, dec!(10_000))
    }

    #[test]
    fn test_empty_history_scores_thirty() {
        // Ratio 0, no negative months (+30), no income.
        assert_eq!(score_cash_flow(&[]), 30);
    }

    #[test]
    fn test_ratio_buckets() {
        // Income 1500 vs expenses 1000 → ratio 1.5 → +50, plus +30 for
        // zero negative months.
        let txs = vec![credit(1, dec!(1_500)), debit(1, dec!(1_000))];
        assert_eq!(score_cash_flow(&txs), 50 + 30);

        // Ratio exactly 1.3 → +40
        let txs = vec![credit(1, dec!(1_300)), debit(1, dec!(1_000))];
        assert_eq!(score_cash_flow(&txs), 40 + 30);

        // Ratio 1.15 → +30
        let txs = vec![credit(1, dec!(1_150)), debit(1, dec!(1_000))];
        assert_eq!(score_cash_flow(&txs), 30 + 30);

        // Ratio 1.0 → +20
        let txs = vec![credit(1, dec!(1_000)), debit(1, dec!(1_000))];
        assert_eq!(score_cash_flow(&txs), 20 + 30);

        // Ratio below 1.0 → +0
        let txs = vec![credit(1, dec!(900)), debit(1, dec!(1_000))];
        assert_eq!(score_cash_flow(&txs), 30);
    }

    #[test]
    fn test_zero_expense_denominator_floors_at_one() {
        // All credits: ratio = 600 / 1 → top bucket.
        let txs = vec![credit(1, dec!(600))];
        assert_eq!(score_cash_flow(&txs), 50 + 30);
    }

    #[test]
    fn test_negative_balance_months_counted_distinctly() {
        let txs = vec![
            tx(1, TransactionKind::Debit, dec!(100), dec!(-50)),
            tx(1, TransactionKind::Debit, dec!(100), dec!(-150)),
            tx(2, TransactionKind::Debit, dec!(100), dec!(-10)),
            tx(3, TransactionKind::Debit, dec!(100), dec!(200)),
        ];
        // Two overdrawn transactions in January still count one month.
        assert_eq!(negative_balance_months(&txs), 2);
    }

    #[test]
    fn test_negative_month_buckets() {
        // One negative month → +15 instead of +30.
        let txs = vec![
            credit(1, dec!(2_000)),
            debit(1, dec!(1_000)),
            tx(2, TransactionKind::Debit, dec!(100), dec!(-5)),
        ];
        // Ratio 2000/1100 ≈ 1.82 → +50; one negative month → +15.
        assert_eq!(score_cash_flow(&txs), 50 + 15);

        // Two negative months → +0.
        let txs = vec![
            credit(1, dec!(2_000)),
            tx(2, TransactionKind::Debit, dec!(100), dec!(-5)),
            tx(3, TransactionKind::Debit, dec!(100), dec!(-5)),
        ];
        // Ratio 2000/200 = 10 → +50.
        assert_eq!(score_cash_flow(&txs), 50);
    }

    #[test]
    fn test_income_level_buckets() {
        // Avg monthly income = total / 6.
        let cases = [
            (dec!(3_000_000), 20), // 500k/month
            (dec!(1_200_000), 15), // 200k/month
            (dec!(600_000), 10),   // 100k/month
            (dec!(300_000), 5),    // 50k/month
            (dec!(299_999), 0),    // just under 50k/month
        ];
        for (income, points) in cases {
            let txs = vec![credit(1, income)];
            // +50 ratio (no expenses), +30 no negative months.
            assert_eq!(score_cash_flow(&txs), (80 + points).min(100));
        }
    }

    #[test]
    fn test_score_caps_at_100() {
        // 50 + 30 + 20 = 100 exactly; the cap keeps it there.
        let txs = vec![credit(1, dec!(3_000_000))];
        assert_eq!(score_cash_flow(&txs), 100);
    }
}
