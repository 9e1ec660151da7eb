use url::Url;

use crate::fetcher::Fetcher;
use crate::models::RobotsInfo;

/// Stored robots.txt excerpts are capped at this many characters.
const ROBOTS_TXT_MAX_CHARS: usize = 2000;

/// Fetches `/robots.txt` from the page's origin and pulls out the first
/// `Sitemap:` directive. An unreachable robots.txt is not an error; the
/// result just comes back empty.
pub async fn probe(fetcher: &Fetcher, final_url: &str) -> RobotsInfo {
    let Ok(parsed) = Url::parse(final_url) else {
        return RobotsInfo::default();
    };
    let robots_url = format!("{}/robots.txt", parsed.origin().ascii_serialization());

    let robots_txt = match fetcher.fetch_text(&robots_url).await {
        Ok(text) => text,
        Err(error) => {
            tracing::debug!(url = %robots_url, error = %error, "robots.txt not reachable");
            String::new()
        }
    };

    let sitemap_url = first_sitemap(&robots_txt).unwrap_or_default();

    RobotsInfo {
        robots_url,
        robots_txt: robots_txt.chars().take(ROBOTS_TXT_MAX_CHARS).collect(),
        sitemap_url,
    }
}

/// First `Sitemap:` directive, matched case-insensitively at the start of
/// a line. The value is everything after the colon, trimmed, so URLs keep
/// their scheme and port colons.
fn first_sitemap(robots_txt: &str) -> Option<String> {
    robots_txt.lines().find_map(|line| {
        let prefix = line.get(..8)?;
        if !prefix.eq_ignore_ascii_case("sitemap:") {
            return None;
        }
        let rest = &line[8..];
        if rest.is_empty() {
            return None;
        }
        Some(rest.trim().to_string())
    })
}
