// src/models/ranking.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A student's aggregate score within one contest.
/// Derived on every request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub student_id: i64,
    pub total_marks: i64,
}

/// A ranking resolved against the contest roster for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the ranking order.
    pub rank: usize,
    pub student_id: i64,
    pub name: String,
    pub total_marks: i64,
}

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize, Validate)]
pub struct LeaderboardParams {
    /// Number of rows to return (default from config, max: 100).
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}
