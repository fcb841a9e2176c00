//! CodeChef: single profile-page scrape.

mod model;
mod scrape;

pub use model::CodeChefStats;

use crate::core::{CpClient, CpError};

/// Fetches the CodeChef statistics for a handle.
///
/// # Errors
///
/// Returns [`CpError::UsernameNotFound`] when the handle does not exist (the
/// page then lacks the rating widget) or the profile markup is missing the
/// expected elements; other variants for transport failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &CpClient, username: &str) -> Result<CodeChefStats, CpError> {
    scrape::fetch_stats(client, username).await
}
