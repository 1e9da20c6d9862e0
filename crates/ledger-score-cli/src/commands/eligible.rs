use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use ledger_score_core::scoring::aggregate::{grade_for, risk_level_for};

use crate::input;

/// Arguments for filtering scored accounts by eligibility
#[derive(Args)]
pub struct EligibleArgs {
    /// Path to a JSON array of {account, score} records
    #[arg(long)]
    pub input: Option<String>,

    /// Minimum qualifying score
    #[arg(long, default_value_t = 550)]
    pub min_score: u16,
}

#[derive(Deserialize, Serialize)]
struct ScoredAccount {
    account: String,
    score: u16,
}

pub fn run_eligible(args: EligibleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let accounts: Vec<ScoredAccount> = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("provide --input FILE or pipe JSON on stdin".into());
    };

    let mut eligible: Vec<ScoredAccount> = accounts
        .into_iter()
        .filter(|a| a.score >= args.min_score)
        .collect();
    eligible.sort_by(|a, b| b.score.cmp(&a.score));

    let rows: Vec<Value> = eligible
        .iter()
        .map(|a| {
            json!({
                "account": a.account,
                "score": a.score,
                "grade": grade_for(a.score).to_string(),
                "risk_level": risk_level_for(a.score).to_string(),
            })
        })
        .collect();

    Ok(json!({
        "count": rows.len(),
        "min_score": args.min_score,
        "eligible": rows,
    }))
}
