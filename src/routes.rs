// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{contest, ranking},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the contest, solved-question, ranking and leaderboard routes.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (contest store and config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/contests", get(contest::list_contests))
        .route("/api/contests/{id}", get(contest::get_contest))
        .route(
            "/api/contests/{id}/solved-questions",
            get(contest::list_solved_questions).post(contest::record_solved_question),
        )
        .route("/api/contests/{id}/rankings", get(ranking::get_rankings))
        .route("/api/contests/{id}/leaderboard", get(ranking::get_leaderboard))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
