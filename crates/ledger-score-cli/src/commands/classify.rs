use clap::Args;
use serde_json::{json, Value};

use ledger_score_core::scoring::aggregate::{grade_for, risk_level_for, MAX_SCORE, MIN_SCORE};

/// Arguments for classifying an existing score
#[derive(Args)]
pub struct ClassifyArgs {
    /// Composite score on the 300-850 scale
    #[arg(long)]
    pub score: u16,
}

pub fn run_classify(args: ClassifyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&args.score) {
        return Err(format!(
            "--score must be between {MIN_SCORE} and {MAX_SCORE}, got {}",
            args.score
        )
        .into());
    }

    Ok(json!({
        "score": args.score,
        "grade": grade_for(args.score).to_string(),
        "risk_level": risk_level_for(args.score).to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mid_band_score() {
        let value = run_classify(ClassifyArgs { score: 660 }).unwrap();
        assert_eq!(value["grade"], "B");
        assert_eq!(value["risk_level"], "Medium");
    }

    #[test]
    fn test_classify_rejects_out_of_scale() {
        assert!(run_classify(ClassifyArgs { score: 299 }).is_err());
        assert!(run_classify(ClassifyArgs { score: 851 }).is_err());
    }
}
