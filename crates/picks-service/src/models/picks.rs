use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::games::GameOutcome;
use crate::utils::errors::grading_error::GradingError;

/// Weight a triple play pick contributes to each standings bucket.
pub const TRIPLE_PLAY_MULTIPLIER: i32 = 3;

/// Which side of the point spread the user took.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    #[default]
    HomeSpread,
    AwaySpread,
}

/// Outcome of a graded pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum PickResult {
    Win,
    Loss,
    Push,
}

/// One user's prediction on one game.
///
/// `result` stays NULL until the game is final; re-grading overwrites it.
#[derive(Clone, Debug, Default, FromRow, Serialize, Deserialize)]
pub struct Pick {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub pick_type: PickType,
    pub spread_value: Option<Decimal>,
    pub is_triple_play: bool,
    pub submitted: bool,
    pub result: Option<PickResult>,
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Pick {
    /// Grade this pick against a final score.
    ///
    /// The spread already encodes the chosen side's perspective: a favorite
    /// carries a negative value, an underdog a positive one, 0 is a pick'em.
    /// Folding home/away into a single signed `margin` keeps the comparison
    /// symmetric, so no side-specific sign handling exists downstream.
    pub fn grade(&self, outcome: &GameOutcome) -> Result<PickResult, GradingError> {
        let spread = self
            .spread_value
            .ok_or(GradingError::MissingSpread { pick_id: self.id })?;

        let margin = match self.pick_type {
            PickType::HomeSpread => outcome.home_score - outcome.away_score,
            PickType::AwaySpread => outcome.away_score - outcome.home_score,
        };

        // Decimal keeps half-point spreads exact, so a zero check needs no
        // epsilon. A half-point spread can never land on zero.
        let adjusted_margin = Decimal::from(margin) + spread;

        Ok(if adjusted_margin > Decimal::ZERO {
            PickResult::Win
        } else if adjusted_margin.is_zero() {
            PickResult::Push
        } else {
            PickResult::Loss
        })
    }

    /// Weight this pick contributes to standings buckets.
    pub fn weight(&self) -> i32 {
        if self.is_triple_play {
            TRIPLE_PLAY_MULTIPLIER
        } else {
            1
        }
    }
}
