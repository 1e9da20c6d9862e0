use chrono::{DateTime, Utc};
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use ledger_score_core::scoring::{self, CreditScoreInput};
use ledger_score_core::{AccountProfile, Transaction};

use crate::input;

/// Arguments for scoring an account
#[derive(Args)]
pub struct ScoreArgs {
    /// Path to JSON input file with profile and transactions
    #[arg(long)]
    pub input: Option<String>,

    /// Reference instant for the trailing window (RFC 3339); defaults to now
    #[arg(long)]
    pub reference_time: Option<DateTime<Utc>>,

    /// Minimum transaction count required before scoring
    #[arg(long, default_value_t = 10)]
    pub min_transactions: usize,
}

/// On-disk payload: the reference time may ride along with the data or
/// come from the flag; the flag wins.
#[derive(Deserialize)]
struct ScorePayload {
    profile: AccountProfile,
    transactions: Vec<Transaction>,
    #[serde(default)]
    reference_time: Option<DateTime<Utc>>,
}

pub fn run_score(args: ScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payload: ScorePayload = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("provide --input FILE or pipe JSON on stdin".into());
    };

    // Scores computed from a thin ledger are degenerate; reject here so
    // the engine itself stays a total function.
    if payload.transactions.len() < args.min_transactions {
        return Err(format!(
            "insufficient transaction history: minimum {} transactions required for scoring, got {}",
            args.min_transactions,
            payload.transactions.len()
        )
        .into());
    }

    let reference_time = args
        .reference_time
        .or(payload.reference_time)
        .unwrap_or_else(Utc::now);

    let input = CreditScoreInput {
        profile: payload.profile,
        transactions: payload.transactions,
        reference_time,
    };
    let output = scoring::calculate_credit_score(&input)?;
    Ok(serde_json::to_value(&output)?)
}
