// src/models/solved_question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Marks a student obtained on one question of a contest.
/// Represents a row of the 'solved_questions' table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SolvedQuestion {
    pub student_id: i64,
    pub question_id: i64,

    /// Missing marks count as zero when ranking.
    #[serde(default)]
    pub obtained_marks: Option<i64>,
}

impl SolvedQuestion {
    pub fn new(student_id: i64, question_id: i64, obtained_marks: i64) -> Self {
        Self {
            student_id,
            question_id,
            obtained_marks: Some(obtained_marks),
        }
    }
}

/// DTO for recording a graded attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordSolvedQuestionRequest {
    #[validate(range(min = 1, message = "student_id must be positive"))]
    pub student_id: i64,

    #[validate(range(min = 1, message = "question_id must be positive"))]
    pub question_id: i64,

    #[validate(range(min = 0, max = 10000, message = "obtained_marks must be between 0 and 10000"))]
    #[serde(default)]
    pub obtained_marks: Option<i64>,
}

impl From<RecordSolvedQuestionRequest> for SolvedQuestion {
    fn from(req: RecordSolvedQuestionRequest) -> Self {
        Self {
            student_id: req.student_id,
            question_id: req.question_id,
            obtained_marks: req.obtained_marks,
        }
    }
}
