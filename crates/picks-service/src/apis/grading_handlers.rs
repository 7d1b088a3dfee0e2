use crate::{
    models::picks::PickResult,
    services::grading_service::GradedPick,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

pub const TAG: &str = "games";

#[derive(Deserialize, ToSchema, Debug)]
pub struct GradeGameRequest {
    /// Final home team score
    pub home_score: i32,
    /// Final away team score
    pub away_score: i32,
}

#[derive(Serialize, ToSchema)]
pub struct PickGradeResponse {
    pub pick_id: Uuid,
    /// Outcome for a successfully graded pick
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PickResult>,
    /// Why the pick could not be graded; the pick needs re-entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<GradedPick> for PickGradeResponse {
    fn from(grade: GradedPick) -> Self {
        match grade.outcome {
            Ok(result) => PickGradeResponse {
                pick_id: grade.pick_id,
                result: Some(result),
                error: None,
            },
            Err(e) => PickGradeResponse {
                pick_id: grade.pick_id,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GradeGameResponse {
    pub game_id: Uuid,
    pub graded: Vec<PickGradeResponse>,
}

/// Grade every pick on a finished game against its final score
///
/// Invalid picks are reported inline rather than failing the batch.
/// Retrying with the same score is safe.
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{game_id}/grade",
    operation_id = "gradeGame",
    request_body = GradeGameRequest,
    responses(
        (status = 200, description = "Picks graded successfully", body = GradeGameResponse),
        (status = 400, description = "Malformed score", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("game_id" = Uuid, Path, description = "Game identifier")
    )
)]
pub(super) async fn grade_game(
    State(app_state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(body): Json<GradeGameRequest>,
) -> Result<(StatusCode, Json<GradeGameResponse>), AppError> {
    let grades = app_state
        .grading_service
        .grade_game(game_id, body.home_score, body.away_score)
        .await?;

    Ok((
        StatusCode::OK,
        Json(GradeGameResponse {
            game_id,
            graded: grades.into_iter().map(PickGradeResponse::from).collect(),
        }),
    ))
}
