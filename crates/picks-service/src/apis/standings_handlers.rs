use crate::{
    models::leaderboard::LeaderboardEntry,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

pub const TAG: &str = "standings";

#[derive(Serialize, ToSchema)]
pub struct StandingsResponse {
    pub standings: Vec<LeaderboardEntry>,
}

/// Get the current leaderboard
#[utoipa::path(
    get,
    tag = TAG,
    path = "/",
    operation_id = "getStandings",
    responses(
        (status = 200, description = "Standings computed successfully", body = StandingsResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_standings(
    State(app_state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<StandingsResponse>), AppError> {
    let standings = app_state.standings_service.list_standings().await?;
    Ok((StatusCode::OK, Json(StandingsResponse { standings })))
}

/// Get one user's standings entry by username
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{username}",
    operation_id = "getUserStanding",
    responses(
        (status = 200, description = "User standing retrieved successfully", body = LeaderboardEntry),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("username" = String, Path, description = "Username")
    )
)]
pub(super) async fn get_user_standing(
    State(app_state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<(StatusCode, Json<LeaderboardEntry>), AppError> {
    let entry = app_state
        .standings_service
        .get_user_standing(&username)
        .await?;
    Ok((StatusCode::OK, Json(entry)))
}
