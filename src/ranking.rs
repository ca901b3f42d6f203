// src/ranking.rs

//! Contest scoring.
//!
//! [`compute_rankings`] folds a contest's solved-question records into one
//! total per student and orders them for the leaderboard.
//! [`resolve_leaderboard`] attaches roster names to that order for display.
//! Both are pure and only borrow their inputs.

use std::collections::HashMap;

use crate::models::{
    contest::EnrolledStudent,
    ranking::{LeaderboardEntry, Ranking},
    solved_question::SolvedQuestion,
};

/// Groups records by student, sums their marks and sorts the totals.
///
/// * `None` and an empty slice both produce an empty ranking.
/// * A record without marks adds zero but still gives its student an entry.
/// * Order is `total_marks` descending, then `student_id` ascending, so ties
///   come out the same on every call.
pub fn compute_rankings(solved: Option<&[SolvedQuestion]>) -> Vec<Ranking> {
    let Some(solved) = solved else {
        return Vec::new();
    };

    let mut totals: HashMap<i64, i64> = HashMap::with_capacity(solved.len());
    for record in solved {
        *totals.entry(record.student_id).or_insert(0) += record.obtained_marks.unwrap_or(0);
    }

    let mut rankings: Vec<Ranking> = totals
        .into_iter()
        .map(|(student_id, total_marks)| Ranking {
            student_id,
            total_marks,
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.total_marks
            .cmp(&a.total_marks)
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    rankings
}

/// Resolves rankings against the roster.
///
/// Rankings with no roster record are skipped; the remaining entries keep the
/// rank of their position in `rankings`. At most `limit` entries are returned.
pub fn resolve_leaderboard(
    rankings: &[Ranking],
    roster: &[EnrolledStudent],
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let names: HashMap<i64, &str> = roster
        .iter()
        .map(|student| (student.id, student.name.as_str()))
        .collect();

    rankings
        .iter()
        .enumerate()
        .filter_map(|(index, ranking)| {
            let Some(name) = names.get(&ranking.student_id) else {
                tracing::debug!(
                    "Skipping ranking for student {} with no roster record",
                    ranking.student_id
                );
                return None;
            };

            Some(LeaderboardEntry {
                rank: index + 1,
                student_id: ranking.student_id,
                name: (*name).to_string(),
                total_marks: ranking.total_marks,
            })
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::contest::Role;

    fn solved(student_id: i64, question_id: i64, marks: i64) -> SolvedQuestion {
        SolvedQuestion::new(student_id, question_id, marks)
    }

    fn student(id: i64, name: &str) -> EnrolledStudent {
        EnrolledStudent {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: Role::Student,
        }
    }

    fn sample() -> Vec<SolvedQuestion> {
        vec![
            solved(7, 1, 40),
            solved(3, 1, 25),
            solved(7, 2, 10),
            solved(9, 1, 0),
            solved(3, 2, 60),
            solved(5, 3, 35),
            solved(5, 1, 15),
        ]
    }

    #[test]
    fn empty_and_absent_input_give_empty_rankings() {
        assert!(compute_rankings(None).is_empty());
        assert!(compute_rankings(Some(&[][..])).is_empty());
    }

    #[test]
    fn ties_are_broken_by_student_id() {
        // A = 1, B = 2: both end on 15.
        let input = vec![solved(1, 10, 10), solved(2, 11, 15), solved(1, 12, 5)];

        let rankings = compute_rankings(Some(input.as_slice()));

        assert_eq!(
            rankings,
            vec![
                Ranking { student_id: 1, total_marks: 15 },
                Ranking { student_id: 2, total_marks: 15 },
            ]
        );
    }

    #[test]
    fn zero_marks_still_produce_an_entry() {
        let input = vec![solved(3, 1, 0)];

        assert_eq!(
            compute_rankings(Some(input.as_slice())),
            vec![Ranking { student_id: 3, total_marks: 0 }]
        );
    }

    #[test]
    fn missing_marks_count_as_zero() {
        let input = vec![
            SolvedQuestion {
                student_id: 4,
                question_id: 1,
                obtained_marks: None,
            },
            solved(4, 2, 12),
            SolvedQuestion {
                student_id: 8,
                question_id: 1,
                obtained_marks: None,
            },
        ];

        assert_eq!(
            compute_rankings(Some(input.as_slice())),
            vec![
                Ranking { student_id: 4, total_marks: 12 },
                Ranking { student_id: 8, total_marks: 0 },
            ]
        );
    }

    #[test]
    fn totals_are_summed_per_student_and_sorted() {
        let input = sample();

        let rankings = compute_rankings(Some(input.as_slice()));

        assert_eq!(
            rankings,
            vec![
                Ranking { student_id: 3, total_marks: 85 },
                Ranking { student_id: 5, total_marks: 50 },
                Ranking { student_id: 7, total_marks: 50 },
                Ranking { student_id: 9, total_marks: 0 },
            ]
        );
    }

    #[test]
    fn marks_are_conserved_and_no_student_is_dropped() {
        let inputs = vec![
            sample(),
            vec![solved(1, 1, 3)],
            (1..=50).map(|i| solved(i % 7, i, i * 3 % 11)).collect(),
        ];

        for input in inputs {
            let rankings = compute_rankings(Some(input.as_slice()));

            let expected_total: i64 = input.iter().filter_map(|r| r.obtained_marks).sum();
            let actual_total: i64 = rankings.iter().map(|r| r.total_marks).sum();
            assert_eq!(actual_total, expected_total);

            let expected_ids: HashSet<i64> = input.iter().map(|r| r.student_id).collect();
            let actual_ids: HashSet<i64> = rankings.iter().map(|r| r.student_id).collect();
            assert_eq!(actual_ids, expected_ids);
            assert_eq!(rankings.len(), expected_ids.len());

            assert!(
                rankings
                    .windows(2)
                    .all(|pair| pair[0].total_marks >= pair[1].total_marks)
            );
        }
    }

    #[test]
    fn repeated_calls_return_equal_results_without_touching_input() {
        let input = sample();
        let snapshot = input.clone();

        let first = compute_rankings(Some(input.as_slice()));
        let second = compute_rankings(Some(input.as_slice()));

        assert_eq!(first, second);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn input_order_does_not_change_the_result() {
        let input = sample();
        let mut reversed = input.clone();
        reversed.reverse();

        assert_eq!(
            compute_rankings(Some(input.as_slice())),
            compute_rankings(Some(reversed.as_slice()))
        );
    }

    #[test]
    fn concurrent_callers_share_one_input() {
        let input = sample();
        let expected = compute_rankings(Some(input.as_slice()));

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| compute_rankings(Some(input.as_slice()))))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn leaderboard_resolves_names_and_keeps_rank_positions() {
        let rankings = compute_rankings(Some(sample().as_slice()));
        // Student 5 is not on the roster.
        let roster = vec![student(3, "Asha"), student(7, "Bo"), student(9, "Cy")];

        let board = resolve_leaderboard(&rankings, &roster, 10);

        assert_eq!(
            board,
            vec![
                LeaderboardEntry {
                    rank: 1,
                    student_id: 3,
                    name: "Asha".to_string(),
                    total_marks: 85,
                },
                LeaderboardEntry {
                    rank: 3,
                    student_id: 7,
                    name: "Bo".to_string(),
                    total_marks: 50,
                },
                LeaderboardEntry {
                    rank: 4,
                    student_id: 9,
                    name: "Cy".to_string(),
                    total_marks: 0,
                },
            ]
        );
    }

    #[test]
    fn leaderboard_respects_limit() {
        let rankings = compute_rankings(Some(sample().as_slice()));
        let roster = vec![
            student(3, "Asha"),
            student(5, "Dee"),
            student(7, "Bo"),
            student(9, "Cy"),
        ];

        let board = resolve_leaderboard(&rankings, &roster, 2);

        let ids: Vec<i64> = board.iter().map(|e| e.student_id).collect();
        assert_eq!(ids, vec![3, 5]);
    }

    #[test]
    fn leaderboard_of_nothing_is_empty() {
        assert!(resolve_leaderboard(&[], &[student(1, "Asha")], 10).is_empty());
    }
}
