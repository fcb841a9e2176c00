//! HTML scrape of the CodeChef profile page.

use crate::core::{CpClient, CpError, markup::Markup, text::first_uint};

use super::model::CodeChefStats;

pub(super) async fn fetch_stats(
    client: &CpClient,
    username: &str,
) -> Result<CodeChefStats, CpError> {
    let url = client.base_codechef().join(username)?;
    let body = client.http().get(url).send().await?.text().await?;
    parse_profile(&body)
}

fn parse_profile(body: &str) -> Result<CodeChefStats, CpError> {
    let doc = Markup::parse(body);

    // A nonexistent handle renders a page without the rating widget.
    let rating_text = doc
        .find("div", "rating-number")
        .ok_or(CpError::UsernameNotFound)?
        .text();
    let rating: i64 = rating_text
        .parse()
        .map_err(|_| CpError::Data(format!("codechef rating is not an integer: {rating_text}")))?;

    // Star band is optional; not every profile renders one.
    let stars = doc.find("span", "rating").map(|n| n.text());

    let section = doc
        .find("section", "rating-data-section problems-solved")
        .ok_or(CpError::UsernameNotFound)?;
    let counts = section.tags("h5");
    let fully_solved = counts
        .first()
        .and_then(|h| first_uint(&h.text()))
        .ok_or(CpError::UsernameNotFound)?;
    let partially_solved = counts
        .get(1)
        .and_then(|h| first_uint(&h.text()))
        .ok_or(CpError::UsernameNotFound)?;

    Ok(CodeChefStats {
        rating,
        stars,
        fully_solved,
        partially_solved,
    })
}
