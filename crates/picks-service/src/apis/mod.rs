use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod grading_handlers;
pub mod standings_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "standings", description = "Leaderboard and per-user records"),
        (name = "games", description = "Final-score grading")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let standings_router = OpenApiRouter::new()
        .routes(routes!(standings_handlers::get_standings))
        .routes(routes!(standings_handlers::get_user_standing));

    let games_router = OpenApiRouter::new().routes(routes!(grading_handlers::grade_game));

    let standings_router =
        OpenApiRouter::with_openapi(api_doc.clone()).nest("/standings", standings_router);

    let games_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/games", games_router);

    let router = OpenApiRouter::new()
        .merge(standings_router)
        .merge(games_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
