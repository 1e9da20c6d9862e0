//! Weighted aggregation of the component scores onto the 300-850 scale,
//! plus grade and risk classification.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Grade, RiskLevel, ScoreBreakdown};

/// Component weights. Must sum to exactly 1.
pub const WEIGHT_TRANSACTION: Decimal = dec!(0.30);
pub const WEIGHT_CASH_FLOW: Decimal = dec!(0.35);
pub const WEIGHT_STABILITY: Decimal = dec!(0.20);
pub const WEIGHT_BEHAVIOR: Decimal = dec!(0.15);

/// Bounds of the composite scale.
pub const MIN_SCORE: u16 = 300;
pub const MAX_SCORE: u16 = 850;

/// Weighted [0, 100] combination of the four component scores.
pub fn raw_score(breakdown: &ScoreBreakdown) -> Decimal {
    Decimal::from(breakdown.transaction) * WEIGHT_TRANSACTION
        + Decimal::from(breakdown.cash_flow) * WEIGHT_CASH_FLOW
        + Decimal::from(breakdown.stability) * WEIGHT_STABILITY
        + Decimal::from(breakdown.behavior) * WEIGHT_BEHAVIOR
}

/// Map a raw [0, 100] value onto the 300-850 scale, rounding half away
/// from zero. Monotone in `raw`.
pub fn scale_score(raw: Decimal) -> u16 {
    let clamped = raw.clamp(Decimal::ZERO, dec!(100));
    let scaled = Decimal::from(MIN_SCORE)
        + clamped / dec!(100) * Decimal::from(MAX_SCORE - MIN_SCORE);
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u16()
        .unwrap_or(MIN_SCORE)
}

/// Letter grade for a composite score, by fixed breakpoints.
pub fn grade_for(score: u16) -> Grade {
    match score {
        s if s >= 800 => Grade::APlus,
        s if s >= 750 => Grade::A,
        s if s >= 700 => Grade::BPlus,
        s if s >= 650 => Grade::B,
        s if s >= 600 => Grade::CPlus,
        s if s >= 550 => Grade::C,
        _ => Grade::D,
    }
}

/// Risk tier for a composite score.
pub fn risk_level_for(score: u16) -> RiskLevel {
    match score {
        s if s >= 700 => RiskLevel::Low,
        s if s >= 600 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}
