// src/handlers/ranking.rs

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    handlers::contest::require_contest,
    models::ranking::LeaderboardParams,
    ranking::{compute_rankings, resolve_leaderboard},
    state::DynContestStore,
};

/// Returns every student's total marks for a contest, highest first.
/// Recomputed from the solved-question records on each call.
pub async fn get_rankings(
    State(store): State<DynContestStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_contest(store.as_ref(), id).await?;

    let solved = store.list_solved_questions(id).await?;
    let rankings = compute_rankings(Some(solved.as_slice()));

    Ok(Json(rankings))
}

/// Returns the leaderboard of a contest with roster names attached.
///
/// Students missing from the roster are left out. `limit` defaults to the
/// configured leaderboard size.
pub async fn get_leaderboard(
    State(store): State<DynContestStore>,
    State(config): State<Config>,
    Path(id): Path<i64>,
    params: Result<Query<LeaderboardParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    params.validate()?;

    require_contest(store.as_ref(), id).await?;

    let solved = store.list_solved_questions(id).await?;
    let roster = store.list_enrolled_students(id).await?;

    let limit = params
        .limit
        .and_then(|limit| usize::try_from(limit).ok())
        .unwrap_or(config.leaderboard_limit);

    let rankings = compute_rankings(Some(solved.as_slice()));
    let leaderboard = resolve_leaderboard(&rankings, &roster, limit);

    Ok(Json(leaderboard))
}
