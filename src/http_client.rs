use anyhow::Result;
use reqwest::{Client, ClientBuilder, header};

const ACCEPT: &str = "*/*";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const CONNECTION: &str = "keep-alive";

/// Creates a reqwest client with a fixed identifying user agent and standard
/// headers. Timeouts are applied per request by the fetcher, not here, since
/// page, text, and HEAD fetches each carry their own deadline.
pub fn build_http_client(user_agent: &str) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, ACCEPT.parse()?);
    headers.insert(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE.parse()?);
    headers.insert(header::CONNECTION, CONNECTION.parse()?);

    let client = ClientBuilder::new()
        .user_agent(user_agent)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(client)
}
