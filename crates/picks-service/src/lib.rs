use apis::setup_routes;
use axum::Router;
use repositories::{pick_repository::PickRepository, user_repository::UserRepository};
use services::{grading_service::GradingService, standings_service::StandingsService};
use sqlx::postgres::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod apis;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

pub struct AppState {
    pub grading_service: GradingService,
    pub standings_service: StandingsService,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Arc::new(pool))
}

pub async fn setup_router(
    settings: &settings::Settings,
) -> Result<Router, Box<dyn std::error::Error>> {
    let db = setup_database(&settings.database_url).await?;
    let (grading_service, standings_service) = setup_services(db);
    let router = setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState {
            grading_service,
            standings_service,
        })))
}

pub fn setup_services(db: Arc<PgPool>) -> (GradingService, StandingsService) {
    let pick_repository = Arc::new(PickRepository::new(db.clone()));
    let user_repository = Arc::new(UserRepository::new(db));
    let grading_service = GradingService::new(pick_repository.clone());
    let standings_service = StandingsService::new(pick_repository, user_repository);
    (grading_service, standings_service)
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}
