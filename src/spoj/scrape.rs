//! HTML scrape of the SPOJ profile page.
//!
//! Rank and points sit in the third paragraph as fixed whitespace-separated
//! tokens ("World Rank: #42 (1234.5 points)"); each keeps a decoration as its
//! first character, which is stripped before parsing. Any drift from that
//! layout is reported as an unknown handle, never a panic.

use crate::core::{CpClient, CpError, markup::Markup, text::strip_lead};

use super::model::SpojStats;

pub(super) async fn fetch_stats(client: &CpClient, username: &str) -> Result<SpojStats, CpError> {
    let url = client.base_spoj().join(&format!("{username}/"))?;
    let body = client.http().get(url).send().await?.text().await?;
    parse_profile(&body, username)
}

fn parse_profile(body: &str, username: &str) -> Result<SpojStats, CpError> {
    let doc = Markup::parse(body);

    let paragraphs = doc.tags("p");
    let stats_line = paragraphs.get(2).ok_or(CpError::UsernameNotFound)?.text();

    let mut tokens = stats_line.split_whitespace();
    let rank_token = tokens.nth(2).ok_or(CpError::UsernameNotFound)?;
    let points_token = tokens.next().ok_or(CpError::UsernameNotFound)?;

    let rank: u64 = strip_lead(rank_token)
        .parse()
        .map_err(|_| CpError::UsernameNotFound)?;
    let points: f64 = strip_lead(points_token)
        .parse()
        .map_err(|_| CpError::UsernameNotFound)?;

    let table = doc
        .find("table", "table table-condensed")
        .ok_or(CpError::UsernameNotFound)?;
    let solved = table
        .tags("td")
        .iter()
        .filter(|cell| {
            cell.tags("a")
                .first()
                .is_some_and(|link| !link.text().is_empty())
        })
        .count() as u64;

    Ok(SpojStats {
        username: username.to_string(),
        points,
        rank,
        solved,
    })
}
