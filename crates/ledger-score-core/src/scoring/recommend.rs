//! Improvement recommendations derived from component deficiencies.

use crate::types::{AccountProfile, ScoreBreakdown};

/// Component scores below this threshold trigger their tips.
const DEFICIENCY_THRESHOLD: u8 = 70;

/// Hard cap on the recommendation list. Later rules are dropped by
/// truncation; first-come precedence is the intended policy.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Build the ordered, capped recommendation list. Rules run in fixed
/// order: activity, cash flow, stability, behaviour, then account age.
/// An empty list means no deficiencies were flagged.
pub fn generate_recommendations(
    breakdown: &ScoreBreakdown,
    profile: &AccountProfile,
) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();

    if breakdown.transaction < DEFICIENCY_THRESHOLD {
        tips.push("Increase transaction frequency - aim for 30+ transactions monthly".to_string());
        tips.push("Diversify income sources across different categories".to_string());
    }

    if breakdown.cash_flow < DEFICIENCY_THRESHOLD {
        tips.push("Improve profit margins - aim for 30%+ income over expenses".to_string());
        tips.push("Maintain positive account balance consistently".to_string());
    }

    if breakdown.stability < DEFICIENCY_THRESHOLD {
        tips.push("Build longer account history - consistency over 12+ months helps".to_string());
        tips.push("Maintain regular monthly transaction patterns".to_string());
    }

    if breakdown.behavior < DEFICIENCY_THRESHOLD {
        tips.push("Avoid overdrafts and negative balances".to_string());
        tips.push("Start saving 10-15% of monthly income".to_string());
    }

    if profile.age_months() < 12 {
        tips.push("Continue building account history - scores improve after 12 months".to_string());
    }

    tips.truncate(MAX_RECOMMENDATIONS);
    tips
}
