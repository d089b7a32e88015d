use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod services;
pub mod views;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

/// Build the full route table. Split out of `main` so integration tests can
/// drive the router directly.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(handlers::dashboard::dashboard))
        // Water
        .route("/water", get(handlers::water::water_page))
        .route("/water", post(handlers::water::add_water))
        .route("/water/:id/edit", post(handlers::water::edit_water))
        .route("/water/:id/delete", post(handlers::water::delete_water))
        // Exercise
        .route("/exercise", get(handlers::exercise::exercise_page))
        .route("/exercise", post(handlers::exercise::add_exercise))
        .route("/exercise/:id/edit", post(handlers::exercise::edit_exercise))
        .route(
            "/exercise/:id/delete",
            post(handlers::exercise::delete_exercise),
        )
        // Sleep
        .route("/sleep", get(handlers::sleep::sleep_page))
        .route("/sleep", post(handlers::sleep::add_sleep))
        .route("/sleep/:id/edit", post(handlers::sleep::edit_sleep))
        .route("/sleep/:id/delete", post(handlers::sleep::delete_sleep))
        // Meals
        .route("/meal", get(handlers::meal::meal_page))
        .route("/meal", post(handlers::meal::add_meal))
        .route("/meal/:id/edit", post(handlers::meal::edit_meal))
        .route("/meal/:id/delete", post(handlers::meal::delete_meal))
        // Water report
        .route("/report", get(handlers::report::report_page))
        // Probes
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Chart artifact
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
