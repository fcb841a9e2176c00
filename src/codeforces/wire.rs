//! Minimal serde mapping for the `user.info` / `user.status` JSON.

use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct InfoEnvelope {
    pub(super) status: Option<String>,
    #[serde(default)]
    pub(super) result: Vec<InfoResult>,
}

#[derive(Deserialize)]
pub(super) struct InfoResult {
    pub(super) rating: Option<i64>,
    pub(super) rank: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct StatusEnvelope {
    pub(super) status: Option<String>,
    #[serde(default)]
    pub(super) result: Vec<Submission>,
}

#[derive(Deserialize)]
pub(super) struct Submission {
    pub(super) id: u64,
    /// Absent while a submission is still in the judging queue.
    pub(super) verdict: Option<String>,
}
