use serde::Serialize;

/// Public statistics scraped from a CodeChef profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeChefStats {
    /// Current contest rating.
    pub rating: i64,
    /// Star band as rendered on the page (absent when the page omits it).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<String>,
    /// Problems solved completely.
    pub fully_solved: u64,
    /// Problems solved for partial credit.
    pub partially_solved: u64,
}
