use serde::Serialize;

/// Public statistics scraped from an InterviewBit profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewBitStats {
    /// The queried handle.
    pub username: String,
    /// Global rank.
    pub rank: i64,
    /// Total score.
    pub score: i64,
}
