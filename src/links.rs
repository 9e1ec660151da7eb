use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tldextract::{TldExtractor, TldOption};
use url::Url;

use crate::models::{Link, LinkKind, LinkSummary};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector should be valid"));

/// Splits internal from external links by registrable domain, so
/// `blog.example.com` counts as internal to `www.example.com` while
/// `example.co.uk` and `other.co.uk` stay distinct.
pub struct LinkClassifier {
    extractor: TldExtractor,
}

impl LinkClassifier {
    /// Classifier backed by the bundled public suffix list.
    pub fn new() -> Self {
        Self {
            extractor: TldExtractor::new(TldOption::default()),
        }
    }

    /// Classifier that splits hosts on the last dot instead of consulting
    /// the suffix list. Multi-part suffixes like `co.uk` are misread, so
    /// this is only suitable for offline use.
    pub fn naive() -> Self {
        Self {
            extractor: TldExtractor::new(TldOption::default().naive_mode(true)),
        }
    }

    /// Registrable domain of a host. IP addresses, localhost, and hosts the
    /// suffix list cannot place fall back to the lowercased host itself.
    fn registrable_domain(&self, host: &str) -> String {
        if host.parse::<std::net::IpAddr>().is_ok() {
            return host.to_lowercase();
        }
        match self.extractor.extract(host) {
            Ok(parts) => match (parts.domain, parts.suffix) {
                (Some(domain), Some(suffix)) => {
                    format!("{}.{}", domain.to_lowercase(), suffix.to_lowercase())
                }
                _ => host.to_lowercase(),
            },
            Err(_) => host.to_lowercase(),
        }
    }

    /// Collects and classifies every `<a href>` in the document. Fragment,
    /// `javascript:`, and `mailto:` links are skipped; relative links
    /// resolve against `base`; unparseable hrefs are dropped.
    pub fn classify(&self, document: &Html, base: &Url) -> Vec<Link> {
        let base_host = base.host_str().unwrap_or_default();
        let base_domain = self.registrable_domain(base_host);

        let mut links = Vec::new();
        for anchor in document.select(&ANCHOR_SELECTOR) {
            let href = anchor.value().attr("href").unwrap_or_default();
            if href.is_empty()
                || href.starts_with("javascript:")
                || href.starts_with("mailto:")
                || href.starts_with('#')
            {
                continue;
            }
            let Ok(absolute) = base.join(href) else {
                continue;
            };
            let host = absolute.host_str().unwrap_or_default();
            // Equal hosts are internal without consulting the suffix list
            let kind = if host == base_host || self.registrable_domain(host) == base_domain {
                LinkKind::Internal
            } else {
                LinkKind::External
            };
            links.push(Link {
                href: absolute.to_string(),
                kind,
            });
        }
        links
    }
}

/// Aggregate counts plus the capped sample that status checking consumes.
pub fn summarize(links: &[Link]) -> LinkSummary {
    let internal = links
        .iter()
        .filter(|link| link.kind == LinkKind::Internal)
        .count();
    LinkSummary {
        total: links.len(),
        internal,
        external: links.len() - internal,
        sample: links.iter().take(20).cloned().collect(),
    }
}
