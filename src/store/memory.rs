// src/store/memory.rs

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContestStore, unknown_reference_message};
use crate::{
    error::AppError,
    models::{
        contest::{Contest, EnrolledStudent},
        solved_question::SolvedQuestion,
    },
};

/// Volatile store kept entirely in process memory.
#[derive(Default)]
pub struct MemoryContestStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    contests: BTreeMap<i64, Contest>,
    users: HashMap<i64, EnrolledStudent>,
    // contest id -> ids of the questions it owns
    questions: HashMap<i64, HashSet<i64>>,
    rosters: HashMap<i64, BTreeMap<i64, EnrolledStudent>>,
    solved: HashMap<i64, Vec<SolvedQuestion>>,
}

impl MemoryContestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a contest.
    pub async fn insert_contest(&self, contest: Contest) {
        self.inner.write().await.contests.insert(contest.id, contest);
    }

    /// Registers a user without enrolling them anywhere.
    pub async fn insert_user(&self, user: EnrolledStudent) {
        self.inner.write().await.users.insert(user.id, user);
    }

    /// Registers a question as part of a contest.
    pub async fn insert_question(&self, contest_id: i64, question_id: i64) {
        self.inner
            .write()
            .await
            .questions
            .entry(contest_id)
            .or_default()
            .insert(question_id);
    }

    /// Registers the student and adds them to a contest roster, replacing any
    /// record with the same id.
    pub async fn enroll(&self, contest_id: i64, student: EnrolledStudent) {
        let mut inner = self.inner.write().await;
        inner.users.insert(student.id, student.clone());
        inner
            .rosters
            .entry(contest_id)
            .or_default()
            .insert(student.id, student);
    }
}

#[async_trait]
impl ContestStore for MemoryContestStore {
    async fn list_contests(&self) -> Result<Vec<Contest>, AppError> {
        let mut contests: Vec<Contest> =
            self.inner.read().await.contests.values().cloned().collect();
        contests.sort_by(|a, b| {
            b.start_time
                .cmp(&a.start_time)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(contests)
    }

    async fn find_contest(&self, contest_id: i64) -> Result<Option<Contest>, AppError> {
        Ok(self.inner.read().await.contests.get(&contest_id).cloned())
    }

    async fn list_enrolled_students(
        &self,
        contest_id: i64,
    ) -> Result<Vec<EnrolledStudent>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .rosters
            .get(&contest_id)
            .map(|roster| roster.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_solved_questions(
        &self,
        contest_id: i64,
    ) -> Result<Vec<SolvedQuestion>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .solved
            .get(&contest_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn record_solved_question(
        &self,
        contest_id: i64,
        record: SolvedQuestion,
    ) -> Result<SolvedQuestion, AppError> {
        let mut inner = self.inner.write().await;
        let question_in_contest = inner
            .questions
            .get(&contest_id)
            .is_some_and(|questions| questions.contains(&record.question_id));
        if !question_in_contest || !inner.users.contains_key(&record.student_id) {
            return Err(AppError::BadRequest(unknown_reference_message(&record)));
        }

        let records = inner.solved.entry(contest_id).or_default();
        let existing = records.iter_mut().find(|r| {
            r.student_id == record.student_id && r.question_id == record.question_id
        });

        let stored = match existing {
            Some(existing) => {
                // `None < Some(_)`, so this matches GREATEST in the Postgres store.
                existing.obtained_marks = existing.obtained_marks.max(record.obtained_marks);
                existing.clone()
            }
            None => {
                records.push(record.clone());
                record
            }
        };

        Ok(stored)
    }
}
