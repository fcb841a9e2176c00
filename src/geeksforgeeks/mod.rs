//! GeeksForGeeks: single profile-page scrape of the two score cards.

mod model;
mod scrape;

pub use model::GeeksForGeeksStats;

use crate::core::{CpClient, CpError};

/// Fetches the GeeksForGeeks statistics for a handle.
///
/// # Errors
///
/// Returns [`CpError::UsernameNotFound`] on a non-2xx profile page or when
/// the score cards are missing; other variants for transport failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &CpClient, username: &str) -> Result<GeeksForGeeksStats, CpError> {
    scrape::fetch_stats(client, username).await
}
