use serde::Serialize;

/// Public statistics scraped from a SPOJ profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpojStats {
    /// The queried handle.
    pub username: String,
    /// Accumulated points.
    pub points: f64,
    /// World rank.
    pub rank: u64,
    /// Number of solved problems listed on the page.
    pub solved: u64,
}
