// src/models/contest.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'contests' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,

    pub title: String,

    /// Markdown description shown on the contest page.
    pub description: Option<String>,

    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Platform role of an enrolled user.
/// Serialized as `STUDENT`, `ADMIN`, `SUPERADMIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Admin,
    Superadmin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Ok(Role::Student),
            "ADMIN" => Ok(Role::Admin),
            "SUPERADMIN" => Ok(Role::Superadmin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// A member of a contest's roster.
/// Only used to turn a student id into a display name on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledStudent {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// DTO for the contest page: the contest itself plus its roster.
#[derive(Debug, Serialize)]
pub struct ContestDetails {
    #[serde(flatten)]
    pub contest: Contest,
    pub enrolled_students: Vec<EnrolledStudent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("SUPERADMIN".parse::<Role>(), Ok(Role::Superadmin));
        assert!("moderator".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_in_upper_case() {
        let json = serde_json::to_string(&Role::Superadmin).unwrap();
        assert_eq!(json, "\"SUPERADMIN\"");

        let role: Role = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(role, Role::Student);
    }
}
