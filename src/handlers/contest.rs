// src/handlers/contest.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        contest::{Contest, ContestDetails},
        solved_question::{RecordSolvedQuestionRequest, SolvedQuestion},
    },
    state::DynContestStore,
    store::ContestStore,
};

/// Loads a contest or fails with 404.
pub(crate) async fn require_contest(
    store: &dyn ContestStore,
    contest_id: i64,
) -> Result<Contest, AppError> {
    store
        .find_contest(contest_id)
        .await?
        .ok_or(AppError::NotFound("Contest not found".to_string()))
}

/// Lists all contests, latest first.
pub async fn list_contests(
    State(store): State<DynContestStore>,
) -> Result<impl IntoResponse, AppError> {
    let contests = store.list_contests().await?;

    Ok(Json(contests))
}

/// Retrieves a single contest together with its roster.
pub async fn get_contest(
    State(store): State<DynContestStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let contest = require_contest(store.as_ref(), id).await?;
    let enrolled_students = store.list_enrolled_students(id).await?;

    Ok(Json(ContestDetails {
        contest,
        enrolled_students,
    }))
}

/// Lists the raw solved-question records of a contest.
pub async fn list_solved_questions(
    State(store): State<DynContestStore>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    require_contest(store.as_ref(), id).await?;
    let solved = store.list_solved_questions(id).await?;

    Ok(Json(solved))
}

/// Records the marks a student obtained on a question.
///
/// * Validates the payload (positive ids, marks within 0..=10000).
/// * Re-recording the same (student, question) keeps the higher mark.
pub async fn record_solved_question(
    State(store): State<DynContestStore>,
    Path(id): Path<i64>,
    payload: Result<Json<RecordSolvedQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    require_contest(store.as_ref(), id).await?;

    let stored = store
        .record_solved_question(id, SolvedQuestion::from(payload))
        .await?;

    tracing::info!(
        "Recorded {:?} marks for student {} on question {} in contest {}",
        stored.obtained_marks,
        stored.student_id,
        stored.question_id,
        id
    );

    Ok((StatusCode::CREATED, Json(stored)))
}
