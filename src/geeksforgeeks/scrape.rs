//! HTML scrape of the GeeksForGeeks profile page.

use crate::core::{
    CpClient, CpError,
    markup::{Markup, Node},
};

use super::model::GeeksForGeeksStats;

pub(super) async fn fetch_stats(
    client: &CpClient,
    username: &str,
) -> Result<GeeksForGeeksStats, CpError> {
    let url = client.base_geeksforgeeks().join(username)?;
    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(CpError::UsernameNotFound);
    }
    let body = resp.text().await?;
    parse_profile(&body, username)
}

fn parse_profile(body: &str, username: &str) -> Result<GeeksForGeeksStats, CpError> {
    let doc = Markup::parse(body);

    // First card carries the overall score, second the solved count.
    let cards = doc.find_all("div", "score_card_left");
    let score = card_value(cards.first())?;
    let solved = card_value(cards.get(1))?;

    Ok(GeeksForGeeksStats {
        username: username.to_string(),
        score,
        solved,
    })
}

fn card_value(card: Option<&Node<'_>>) -> Result<i64, CpError> {
    let text = card
        .ok_or(CpError::UsernameNotFound)?
        .find_class("score_card_value")
        .ok_or(CpError::UsernameNotFound)?
        .text();
    text.parse()
        .map_err(|_| CpError::Data(format!("geeksforgeeks score is not an integer: {text}")))
}
