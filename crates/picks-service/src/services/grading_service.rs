use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    models::{
        games::GameOutcome,
        picks::{Pick, PickResult},
    },
    repositories::pick_repository::PickRepository,
    utils::errors::{app_error::AppError, grading_error::GradingError},
};

/// Grading outcome for a single pick. Invalid picks carry their error here
/// instead of failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedPick {
    pub pick_id: Uuid,
    pub outcome: Result<PickResult, GradingError>,
}

#[derive(Clone)]
pub struct GradingService {
    pick_repository: Arc<PickRepository>,
}

impl GradingService {
    pub fn new(pick_repository: Arc<PickRepository>) -> Self {
        GradingService { pick_repository }
    }

    /// Grade every pick tied to a finished game and persist the successful
    /// results. Re-running with the same score yields the same outcomes, so
    /// retried jobs and score corrections are safe.
    pub async fn grade_game(
        &self,
        game_id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> Result<Vec<GradedPick>, AppError> {
        let outcome = GameOutcome::new(home_score, away_score)?;
        let picks = self.pick_repository.list_picks_for_game(game_id).await?;

        info!(
            "Grading {} picks for game {} at {}-{}",
            picks.len(),
            game_id,
            home_score,
            away_score
        );

        let grades = grade_picks_for_game(game_id, &outcome, &picks);

        let mut results = Vec::with_capacity(grades.len());
        for grade in &grades {
            match &grade.outcome {
                Ok(result) => results.push((grade.pick_id, *result)),
                Err(e) => warn!("Pick {} not graded: {}", grade.pick_id, e),
            }
        }

        self.pick_repository.update_results(&results).await?;

        info!(
            "Graded game {}: {} results written, {} picks invalid",
            game_id,
            results.len(),
            grades.len() - results.len()
        );

        Ok(grades)
    }
}

/// Grade all picks belonging to `game_id` against one final score.
///
/// Pure over its inputs: filters to the game's picks and maps each through
/// `Pick::grade`. A pick that cannot be graded is reported per-pick; it never
/// aborts its siblings.
pub fn grade_picks_for_game(
    game_id: Uuid,
    outcome: &GameOutcome,
    picks: &[Pick],
) -> Vec<GradedPick> {
    picks
        .iter()
        .filter(|pick| pick.game_id == game_id)
        .map(|pick| GradedPick {
            pick_id: pick.id,
            outcome: pick.grade(outcome),
        })
        .collect()
}
