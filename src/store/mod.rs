// src/store/mod.rs

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        contest::{Contest, EnrolledStudent},
        solved_question::SolvedQuestion,
    },
};

pub use memory::MemoryContestStore;
pub use postgres::PgContestStore;

/// Data source for contests, their rosters and graded attempts.
///
/// Handlers only talk to this trait, so the service can run against
/// Postgres in production and an in-memory store in tests.
#[async_trait]
pub trait ContestStore: Send + Sync {
    /// All contests, most recent start first.
    async fn list_contests(&self) -> Result<Vec<Contest>, AppError>;

    async fn find_contest(&self, contest_id: i64) -> Result<Option<Contest>, AppError>;

    /// Roster of a contest, ordered by student id.
    async fn list_enrolled_students(&self, contest_id: i64)
    -> Result<Vec<EnrolledStudent>, AppError>;

    /// Every solved-question record of a contest.
    async fn list_solved_questions(&self, contest_id: i64)
    -> Result<Vec<SolvedQuestion>, AppError>;

    /// Stores a graded attempt.
    ///
    /// There is at most one record per (student, question); re-recording keeps
    /// the higher of the two marks. Returns the stored record.
    ///
    /// Fails with `BadRequest` when the student is unknown or the question does
    /// not belong to `contest_id`.
    async fn record_solved_question(
        &self,
        contest_id: i64,
        record: SolvedQuestion,
    ) -> Result<SolvedQuestion, AppError>;
}

/// Error text shared by every store when a record points at an unknown
/// student or at a question outside the contest.
pub(crate) fn unknown_reference_message(record: &SolvedQuestion) -> String {
    format!(
        "Unknown student {} or question {} in this contest",
        record.student_id, record.question_id
    )
}
