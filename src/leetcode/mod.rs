//! LeetCode: profile-page existence probe, then the `getUserProfile` GraphQL
//! query with the profile URL as referer.

mod api;
mod model;
mod wire;

pub use model::LeetCodeStats;

use crate::core::{CpClient, CpError};

/// Fetches the LeetCode solved-problem counts for a handle.
///
/// # Errors
///
/// Returns [`CpError::UsernameNotFound`] when the profile-page probe answers
/// non-2xx; a non-2xx GraphQL response surfaces as [`CpError::Status`]
/// unchanged; other variants for transport and decode failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &CpClient, username: &str) -> Result<LeetCodeStats, CpError> {
    api::fetch_stats(client, username).await
}
