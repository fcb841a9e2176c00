//! SPOJ: single profile-page scrape with positional token parsing.

mod model;
mod scrape;

pub use model::SpojStats;

use crate::core::{CpClient, CpError};

/// Fetches the SPOJ statistics for a handle.
///
/// # Errors
///
/// Returns [`CpError::UsernameNotFound`] when the handle does not exist or
/// the page layout does not match the expected paragraph/table structure;
/// other variants for transport failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &CpClient, username: &str) -> Result<SpojStats, CpError> {
    scrape::fetch_stats(client, username).await
}
