use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::errors::grading_error::GradingError;

/// Final score of a completed game. The caller is responsible for deciding
/// when a game is actually final; grading trusts the scores it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GameOutcome {
    pub home_score: i32,
    pub away_score: i32,
}

impl GameOutcome {
    pub fn new(home_score: i32, away_score: i32) -> Result<Self, GradingError> {
        if home_score < 0 || away_score < 0 {
            return Err(GradingError::MalformedScore {
                home: home_score,
                away: away_score,
            });
        }
        Ok(GameOutcome {
            home_score,
            away_score,
        })
    }
}
