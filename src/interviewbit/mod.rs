//! InterviewBit: single profile-page scrape of the user-stats container.

mod model;
mod scrape;

pub use model::InterviewBitStats;

use crate::core::{CpClient, CpError};

/// Fetches the InterviewBit statistics for a handle.
///
/// # Errors
///
/// Returns [`CpError::UsernameNotFound`] on a non-2xx profile page or when
/// the stats container is missing; other variants for transport failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &CpClient, username: &str) -> Result<InterviewBitStats, CpError> {
    scrape::fetch_stats(client, username).await
}
