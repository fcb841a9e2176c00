use serde::Serialize;

/// Public statistics scraped from a GeeksForGeeks profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeeksForGeeksStats {
    /// The queried handle.
    pub username: String,
    /// Overall coding score.
    pub score: i64,
    /// Number of problems solved.
    pub solved: i64,
}
