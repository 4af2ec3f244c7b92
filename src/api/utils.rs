use reqwest::Client;
use reqwest::header::USER_AGENT;

use crate::error::SourceError;

// Yahoo throttles requests without a browser user agent.
const REQUEST_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub async fn fetch_body(client: &Client, url: &str) -> Result<(u16, String), SourceError> {
    let res = client
        .get(url)
        .header(USER_AGENT, REQUEST_USER_AGENT)
        .send()
        .await?;

    let status = res.status().as_u16();
    let body = res.text().await?;

    Ok((status, body))
}
