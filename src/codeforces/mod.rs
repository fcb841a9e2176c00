//! Codeforces: two concurrent REST calls (`user.info` + `user.status`),
//! joined before the record is assembled.

mod api;
mod model;
mod wire;

pub use model::{CodeforcesStats, Rating};

use crate::core::{CpClient, CpError};

/// Fetches the Codeforces statistics for a handle.
///
/// `problem_count` is the number of distinct submission ids carrying the
/// verdict `"OK"`. Submission ids are already unique, so this is an accepted
/// submission count; it is published as-is.
///
/// # Errors
///
/// Returns [`CpError::UsernameNotFound`] when either endpoint answers with a
/// non-2xx status or a non-`"OK"` envelope; other variants for transport and
/// decode failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(client: &CpClient, username: &str) -> Result<CodeforcesStats, CpError> {
    api::fetch_stats(client, username).await
}
