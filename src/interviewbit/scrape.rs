//! HTML scrape of the InterviewBit profile page.

use crate::core::{
    CpClient, CpError,
    markup::{Markup, Node},
};

use super::model::InterviewBitStats;

pub(super) async fn fetch_stats(
    client: &CpClient,
    username: &str,
) -> Result<InterviewBitStats, CpError> {
    let url = client.base_interviewbit().join(username)?;
    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(CpError::UsernameNotFound);
    }
    let body = resp.text().await?;
    parse_profile(&body, username)
}

fn parse_profile(body: &str, username: &str) -> Result<InterviewBitStats, CpError> {
    let doc = Markup::parse(body);

    let stats = doc
        .find("div", "user-stats")
        .ok_or(CpError::UsernameNotFound)?;

    // Only the container's immediate blocks: rank first, score second.
    let blocks = stats.children("div");
    let rank = block_value(blocks.first())?;
    let score = block_value(blocks.get(1))?;

    Ok(InterviewBitStats {
        username: username.to_string(),
        rank,
        score,
    })
}

fn block_value(block: Option<&Node<'_>>) -> Result<i64, CpError> {
    let text = block
        .ok_or(CpError::UsernameNotFound)?
        .find("div", "txt")
        .ok_or(CpError::UsernameNotFound)?
        .text();
    text.parse()
        .map_err(|_| CpError::Data(format!("interviewbit stat is not an integer: {text}")))
}
