use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use super::grading_error::GradingError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    /// Human-readable description of the failure
    pub message: String,
    /// HTTP status code, mirrored from the response status
    pub code: u16,
    /// Stable machine-readable error identifier
    pub r#type: String,
    /// Structured context, e.g. the pick or score values that failed grading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Context for grading failures so the caller can fix the offending data
/// (re-enter the pick's spread, correct the score) without parsing messages.
pub fn grading_details(error: &GradingError) -> serde_json::Value {
    match error {
        GradingError::MissingSpread { pick_id } => json!({ "pick_id": pick_id }),
        GradingError::MalformedScore { home, away } => {
            json!({ "home_score": home, "away_score": away })
        }
    }
}
