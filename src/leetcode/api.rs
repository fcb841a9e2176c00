//! Existence probe + `getUserProfile` GraphQL call.

use crate::core::{CpClient, CpError};

use super::model::LeetCodeStats;
use super::wire::GraphqlEnvelope;

/// The full profile query; only `acSubmissionNum` is consumed here, but the
/// document is sent as the site's frontend sends it.
const GRAPHQL_QUERY: &str = "query getUserProfile($username: String!) {  allQuestionsCount {    difficulty    count  }  matchedUser(username: $username) {    contributions {    points      questionCount      testcaseCount    }    profile {    reputation      ranking    }    submitStats {      acSubmissionNum {        difficulty        count        submissions      }      totalSubmissionNum {        difficulty        count        submissions      }    }  }}";

pub(super) async fn fetch_stats(
    client: &CpClient,
    username: &str,
) -> Result<LeetCodeStats, CpError> {
    // The profile page 404s for unknown handles; probe it before querying.
    let profile_url = client.base_leetcode().join(username)?;
    let probe = client.http().get(profile_url.clone()).send().await?;
    if !probe.status().is_success() {
        return Err(CpError::UsernameNotFound);
    }

    let payload = serde_json::json!({
        "operationName": "getUserProfile",
        "variables": { "username": username },
        "query": GRAPHQL_QUERY,
    });

    let resp = client
        .http()
        .post(client.leetcode_graphql().clone())
        .header(reqwest::header::REFERER, format!("{profile_url}/"))
        .json(&payload)
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(CpError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;
    let envelope: GraphqlEnvelope = serde_json::from_str(&text)
        .map_err(|e| CpError::Data(format!("leetcode graphql parse: {e}")))?;

    let submissions = envelope
        .data
        .and_then(|d| d.matched_user)
        .and_then(|u| u.submit_stats)
        .and_then(|s| s.ac_submission_num)
        .ok_or_else(|| CpError::Data("leetcode acSubmissionNum missing".into()))?;

    // Difficulties absent from the list keep their zero count.
    let mut total = 0;
    let mut easy = 0;
    let mut medium = 0;
    let mut hard = 0;
    for entry in submissions {
        match entry.difficulty.as_str() {
            "All" => total = entry.count,
            "Easy" => easy = entry.count,
            "Medium" => medium = entry.count,
            "Hard" => hard = entry.count,
            _ => {}
        }
    }

    Ok(LeetCodeStats {
        total_problems_solved: total.to_string(),
        easy_questions_solved: easy.to_string(),
        medium_questions_solved: medium.to_string(),
        hard_questions_solved: hard.to_string(),
    })
}
