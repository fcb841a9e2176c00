//! Fan-out to the two Codeforces REST endpoints.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{CpClient, CpError};

use super::model::{CodeforcesStats, Rating};
use super::wire::{InfoEnvelope, StatusEnvelope};

pub(super) async fn fetch_stats(
    client: &CpClient,
    username: &str,
) -> Result<CodeforcesStats, CpError> {
    let mut info_url = client.base_codeforces_api().join("user.info")?;
    info_url.query_pairs_mut().append_pair("handles", username);

    let mut status_url = client.base_codeforces_api().join("user.status")?;
    status_url.query_pairs_mut().append_pair("handle", username);

    // Both requests in flight at once; both must succeed.
    let (info, submissions) = tokio::try_join!(
        get_json::<InfoEnvelope>(client, info_url),
        get_json::<StatusEnvelope>(client, status_url),
    )?;

    if info.status.as_deref() != Some("OK") {
        return Err(CpError::UsernameNotFound);
    }
    let user = info
        .result
        .first()
        .ok_or_else(|| CpError::Data("user.info result is empty".into()))?;

    // An account with no rated contest has neither key; both fields then
    // report "Unrated" rather than failing.
    let (rating, rank) = match (user.rating, user.rank.as_deref()) {
        (Some(rating), Some(rank)) => (Rating::Rated(rating), rank.to_string()),
        _ => (Rating::Unrated, "Unrated".to_string()),
    };

    if submissions.status.as_deref() != Some("OK") {
        return Err(CpError::UsernameNotFound);
    }

    // Distinct submission ids with an accepted verdict. Submission ids are
    // unique per submission, so in practice this counts accepted submissions
    // rather than solved problems; the count is kept exactly as published.
    let accepted: HashSet<u64> = submissions
        .result
        .iter()
        .filter(|s| s.verdict.as_deref() == Some("OK"))
        .map(|s| s.id)
        .collect();

    Ok(CodeforcesStats {
        username: username.to_string(),
        rating,
        rank,
        problem_count: accepted.len() as u64,
    })
}

async fn get_json<T: DeserializeOwned>(client: &CpClient, url: Url) -> Result<T, CpError> {
    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(CpError::UsernameNotFound);
    }
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| CpError::Data(format!("codeforces json parse: {e}")))
}
