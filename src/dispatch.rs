//! Platform dispatch: the single inbound surface of the crate.

use crate::core::{CpClient, CpError, Platform, ProfileStats};

/// Fetches the profile statistics for `username` on `platform`.
///
/// The platform identifier must be one of `codechef`, `codeforces`, `spoj`,
/// `geeksforgeeks`, `interviewbit`, `leetcode`, matched case-sensitively
/// with no canonicalization.
///
/// # Errors
///
/// Returns [`CpError::PlatformNotSupported`] for any other identifier;
/// otherwise the delegated strategy's result is propagated unchanged.
pub async fn get_details(
    client: &CpClient,
    username: &str,
    platform: &str,
) -> Result<ProfileStats, CpError> {
    let platform: Platform = platform.parse()?;
    fetch(client, username, platform).await
}

/// Fetches the profile statistics for `username` on an already-resolved
/// [`Platform`].
///
/// # Errors
///
/// Propagates the delegated strategy's failure unchanged.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch(
    client: &CpClient,
    username: &str,
    platform: Platform,
) -> Result<ProfileStats, CpError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(platform = %platform, "dispatching profile lookup");

    match platform {
        Platform::CodeChef => crate::codechef::fetch(client, username)
            .await
            .map(ProfileStats::CodeChef),
        Platform::Codeforces => crate::codeforces::fetch(client, username)
            .await
            .map(ProfileStats::Codeforces),
        Platform::Spoj => crate::spoj::fetch(client, username)
            .await
            .map(ProfileStats::Spoj),
        Platform::GeeksForGeeks => crate::geeksforgeeks::fetch(client, username)
            .await
            .map(ProfileStats::GeeksForGeeks),
        Platform::InterviewBit => crate::interviewbit::fetch(client, username)
            .await
            .map(ProfileStats::InterviewBit),
        Platform::LeetCode => crate::leetcode::fetch(client, username)
            .await
            .map(ProfileStats::LeetCode),
    }
}
