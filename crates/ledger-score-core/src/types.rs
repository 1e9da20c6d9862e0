use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// A single ledger entry for a business account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Transacted amount. Always non-negative; direction lives in `kind`.
    pub amount: Money,
    /// Free-form category label, e.g. "sales", "loan_repayment", "savings".
    pub category: String,
    /// Account balance snapshot after this entry. May be negative.
    pub balance: Money,
}

/// Account profile supplied by the persistence layer.
///
/// Only `account_age_months` participates in scoring; the remaining
/// fields are carried for display by callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_age_months: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
}

impl AccountProfile {
    /// Account age in months, with absent treated as zero.
    pub fn age_months(&self) -> u32 {
        self.account_age_months.unwrap_or(0)
    }
}

/// Letter grade derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::APlus => write!(f, "A+"),
            Self::A => write!(f, "A"),
            Self::BPlus => write!(f, "B+"),
            Self::B => write!(f, "B"),
            Self::CPlus => write!(f, "C+"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

/// Risk tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Per-component scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub transaction: u8,
    pub cash_flow: u8,
    pub stability: u8,
    pub behavior: u8,
}

/// Final scoring result handed back to the caller for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditScoreResult {
    /// Composite score on the 300-850 scale.
    pub score: u16,
    pub grade: Grade,
    pub risk_level: RiskLevel,
    pub breakdown: ScoreBreakdown,
    /// At most five improvement tips, in fixed rule order.
    pub recommendations: Vec<String>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_grade_serializes_with_plus_suffix() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
        assert_eq!(serde_json::to_string(&Grade::D).unwrap(), "\"D\"");
    }

    #[test]
    fn test_grade_display_matches_serde() {
        for grade in [
            Grade::APlus,
            Grade::A,
            Grade::BPlus,
            Grade::B,
            Grade::CPlus,
            Grade::C,
            Grade::D,
        ] {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{grade}\""));
        }
    }

    #[test]
    fn test_transaction_kind_lowercase() {
        let t: TransactionKind = serde_json::from_str("\"credit\"").unwrap();
        assert_eq!(t, TransactionKind::Credit);
        assert_eq!(
            serde_json::to_string(&TransactionKind::Debit).unwrap(),
            "\"debit\""
        );
    }

    #[test]
    fn test_profile_age_defaults_to_zero() {
        let profile = AccountProfile::default();
        assert_eq!(profile.age_months(), 0);
    }

    #[test]
    fn test_transaction_deserializes_type_field() {
        let json = r#"{
            "date": "2025-03-15T09:30:00Z",
            "type": "debit",
            "amount": "2500.00",
            "category": "supplies",
            "balance": "-120.50"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Debit);
        assert!(tx.balance < Decimal::ZERO);
    }
}
