// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{ContestStore, unknown_reference_message};
use crate::{
    error::AppError,
    models::{
        contest::{Contest, EnrolledStudent, Role},
        solved_question::SolvedQuestion,
    },
};

/// Postgres-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgContestStore {
    pool: PgPool,
}

impl PgContestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Helper struct for reading roster rows; `role` is stored as TEXT.
#[derive(FromRow)]
struct EnrolledStudentRow {
    id: i64,
    name: String,
    email: String,
    role: String,
}

impl TryFrom<EnrolledStudentRow> for EnrolledStudent {
    type Error = AppError;

    fn try_from(row: EnrolledStudentRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(AppError::InternalServerError)?;

        Ok(EnrolledStudent {
            id: row.id,
            name: row.name,
            email: row.email,
            role,
        })
    }
}

#[async_trait]
impl ContestStore for PgContestStore {
    async fn list_contests(&self) -> Result<Vec<Contest>, AppError> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, title, description, start_time, end_time, created_at
            FROM contests
            ORDER BY start_time DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contests: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(contests)
    }

    async fn find_contest(&self, contest_id: i64) -> Result<Option<Contest>, AppError> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, title, description, start_time, end_time, created_at
            FROM contests
            WHERE id = $1
            "#,
        )
        .bind(contest_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contest)
    }

    async fn list_enrolled_students(
        &self,
        contest_id: i64,
    ) -> Result<Vec<EnrolledStudent>, AppError> {
        let rows = sqlx::query_as::<_, EnrolledStudentRow>(
            r#"
            SELECT u.id, u.name, u.email, u.role
            FROM contest_enrollments ce
            JOIN users u ON ce.user_id = u.id
            WHERE ce.contest_id = $1
            ORDER BY u.id
            "#,
        )
        .bind(contest_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch roster of contest {}: {:?}", contest_id, e);
            AppError::InternalServerError(e.to_string())
        })?;

        rows.into_iter().map(EnrolledStudent::try_from).collect()
    }

    async fn list_solved_questions(
        &self,
        contest_id: i64,
    ) -> Result<Vec<SolvedQuestion>, AppError> {
        let solved = sqlx::query_as::<_, SolvedQuestion>(
            r#"
            SELECT student_id, question_id, obtained_marks
            FROM solved_questions
            WHERE contest_id = $1
            ORDER BY id
            "#,
        )
        .bind(contest_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch solved questions of contest {}: {:?}",
                contest_id,
                e
            );
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(solved)
    }

    async fn record_solved_question(
        &self,
        contest_id: i64,
        record: SolvedQuestion,
    ) -> Result<SolvedQuestion, AppError> {
        // Upsert: keep the highest marks if the student is graded again
        let stored = sqlx::query_as::<_, SolvedQuestion>(
            r#"
            INSERT INTO solved_questions (contest_id, student_id, question_id, obtained_marks)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (contest_id, student_id, question_id) DO UPDATE SET
                obtained_marks = GREATEST(EXCLUDED.obtained_marks, solved_questions.obtained_marks),
                updated_at = CURRENT_TIMESTAMP
            RETURNING student_id, question_id, obtained_marks
            "#,
        )
        .bind(contest_id)
        .bind(record.student_id)
        .bind(record.question_id)
        .bind(record.obtained_marks)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::BadRequest(unknown_reference_message(&record))
            } else {
                tracing::error!("Failed to upsert solved question: {:?}", e);
                AppError::InternalServerError(e.to_string())
            }
        })?;

        Ok(stored)
    }
}

/// Postgres error code for foreign key violation is 23503.
fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.code().as_deref() == Some("23503"),
        _ => false,
    }
}
