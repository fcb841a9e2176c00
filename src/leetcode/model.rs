use serde::Serialize;

/// Solved-problem counts from the LeetCode GraphQL API.
///
/// The counts are published as strings, matching the shape of the upstream
/// record consumers already expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeetCodeStats {
    pub total_problems_solved: String,
    pub easy_questions_solved: String,
    pub medium_questions_solved: String,
    pub hard_questions_solved: String,
}
