use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Score an account from a JSON payload of profile, transactions, and
/// reference time; returns the computation envelope as JSON.
#[napi]
pub fn calculate_credit_score(input_json: String) -> NapiResult<String> {
    let input: ledger_score_core::scoring::CreditScoreInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        ledger_score_core::scoring::calculate_credit_score(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Classify an existing 300-850 score into grade and risk tier.
#[napi]
pub fn classify_score(score: u32) -> NapiResult<String> {
    let score = u16::try_from(score).map_err(to_napi_error)?;
    let value = serde_json::json!({
        "score": score,
        "grade": ledger_score_core::scoring::aggregate::grade_for(score).to_string(),
        "risk_level": ledger_score_core::scoring::aggregate::risk_level_for(score).to_string(),
    });
    serde_json::to_string(&value).map_err(to_napi_error)
}
