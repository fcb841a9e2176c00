//! Minimal serde mapping for the `getUserProfile` GraphQL response.

use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct GraphqlEnvelope {
    pub(super) data: Option<GraphqlData>,
}

#[derive(Deserialize)]
pub(super) struct GraphqlData {
    #[serde(rename = "matchedUser")]
    pub(super) matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
pub(super) struct MatchedUser {
    #[serde(rename = "submitStats")]
    pub(super) submit_stats: Option<SubmitStats>,
}

#[derive(Deserialize)]
pub(super) struct SubmitStats {
    #[serde(rename = "acSubmissionNum")]
    pub(super) ac_submission_num: Option<Vec<DifficultyCount>>,
}

#[derive(Deserialize)]
pub(super) struct DifficultyCount {
    pub(super) difficulty: String,
    pub(super) count: u64,
}
