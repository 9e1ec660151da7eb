use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::http_client::build_http_client;

/// Fixed client identity and per-operation deadlines for all network calls.
/// Passed in at construction so tests can inject short timeouts.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub page_timeout: Duration,
    pub text_timeout: Duration,
    pub head_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "seolens/0.1 (+https://github.com/seolens/seolens)".to_string(),
            page_timeout: Duration::from_secs(20),
            text_timeout: Duration::from_secs(15),
            head_timeout: Duration::from_secs(8),
        }
    }
}

/// Outcome of the primary page fetch after redirects.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub final_url: String,
    pub status: u16,
    pub content_type: String,
    /// Populated only when the response declares an HTML content type.
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self { client, config })
    }

    /// GET the page, following redirects. The body is decoded only for HTML
    /// responses; anything else comes back empty so binary payloads are
    /// never read. Network errors and timeouts propagate to the caller.
    pub async fn fetch_page(&self, url: &str) -> Result<FetchResult> {
        let response = self
            .client
            .get(url)
            .timeout(self.config.page_timeout)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        let final_url = response.url().to_string();
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = if is_html(&content_type) {
            response
                .text()
                .await
                .with_context(|| format!("Failed to read body of {url}"))?
        } else {
            tracing::debug!(url = %url, content_type = %content_type, "Skipping non-HTML body");
            String::new()
        };

        Ok(FetchResult {
            final_url,
            status,
            content_type,
            body,
        })
    }

    /// GET a small text resource such as robots.txt. The body is returned
    /// for any status code; network errors and timeouts propagate.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .timeout(self.config.text_timeout)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))
    }

    /// HEAD probe for reachability. Never fails: connection errors,
    /// timeouts, and unsupported schemes all collapse to status 0.
    pub async fn head_status(&self, url: &str) -> u16 {
        match self
            .client
            .head(url)
            .timeout(self.config.head_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().as_u16(),
            Err(_) => 0,
        }
    }
}

/// True when a content-type header declares an HTML payload.
pub fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}
