use std::time::Duration;

use anyhow::Error;
use reqwest::Client;
use scraper::{Html, Selector};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_http_client() -> Result<Client, Error> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;

    Ok(client)
}

/// Fetches `url` and reduces the page to the text of its `<p>` elements.
///
/// Every failure mode (malformed URL, DNS, refused connection, timeout,
/// non-2xx status, page without paragraphs) collapses to an empty string, so
/// callers only have to check one signal. The cause is logged before being
/// swallowed.
pub async fn fetch_article_text(client: &Client, url: &str) -> String {
    match try_fetch_article_text(client, url).await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to fetch article text from {:?}: {:?}", url, e);
            String::new()
        }
    }
}

async fn try_fetch_article_text(client: &Client, url: &str) -> Result<String, Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;

    Ok(extract_paragraph_text(&body))
}

/// Concatenates the text of all paragraph elements, with runs of whitespace
/// (tabs, newlines, repeated spaces) collapsed to single spaces and the ends
/// trimmed.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph_selector = Selector::parse("p").unwrap();

    let paragraphs: Vec<String> = document
        .select(&paragraph_selector)
        .map(|paragraph| paragraph.text().collect::<String>())
        .collect();

    paragraphs
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
