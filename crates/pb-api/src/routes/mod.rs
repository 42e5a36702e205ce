//! API route definitions and router builder.

pub mod answers;
pub mod health;
pub mod menu;
pub mod plots;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Menu endpoints
        .route("/menu", get(menu::list_subjects))
        .route(
            "/subjects/{subject}/questions",
            get(menu::list_questions),
        )
        // Answer lookup
        .route("/answer", get(answers::get_answer))
        // Plot lookup
        .route("/plots/{number}", get(plots::get_plot));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
