use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use scraper::Html;
use url::Url;

use crate::extractor;
use crate::fetcher::{self, FetchConfig, Fetcher};
use crate::keywords;
use crate::link_checker::LinkChecker;
use crate::links::{self, LinkClassifier};
use crate::models::{AnalysisReport, PageAnalysis, ReportBody, RequestEcho};
use crate::robots;
use crate::scorer;

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub fetch: FetchConfig,
    /// Upper bound on link-status probes per analysis.
    pub link_check_limit: usize,
    /// Classify link hosts without the public suffix list. Offline only.
    pub naive_tld: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            link_check_limit: 50,
            naive_tld: false,
        }
    }
}

/// Accepts scheme-less input by retrying with an `https://` prefix when
/// the input does not parse as an absolute URL.
pub fn normalize_url(input: &str) -> Option<String> {
    if let Ok(url) = Url::parse(input) {
        return Some(url.to_string());
    }
    Url::parse(&format!("https://{input}"))
        .ok()
        .map(|url| url.to_string())
}

/// Quality hints and scorer tips merged into one list, first occurrence
/// wins.
fn dedup_recommendations(hints: &[String], tips: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    hints
        .iter()
        .chain(tips.iter())
        .filter(|text| seen.insert(text.as_str()))
        .cloned()
        .collect()
}

/// Runs the whole pipeline for one page: fetch, extract, classify links,
/// probe robots.txt and link statuses, score, and suggest keywords.
pub struct Analyzer {
    fetcher: Fetcher,
    classifier: LinkClassifier,
    link_checker: LinkChecker,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let fetcher = Fetcher::new(config.fetch)?;
        let classifier = if config.naive_tld {
            LinkClassifier::naive()
        } else {
            LinkClassifier::new()
        };
        let link_checker = LinkChecker::new(fetcher.clone(), config.link_check_limit);
        Ok(Self {
            fetcher,
            classifier,
            link_checker,
        })
    }

    /// Enable progress bar for the link checking stage
    pub fn enable_progress_bar(&mut self) {
        self.link_checker.enable_progress_bar();
    }

    /// Analyzes a single page. Unusable input URLs and network failures on
    /// the primary fetch are errors; a reachable but non-HTML response
    /// degrades to a report that carries only the request echo and an
    /// explanatory message.
    pub async fn analyze(&self, input_url: &str) -> Result<AnalysisReport> {
        let Some(normalized) = normalize_url(input_url) else {
            bail!("Invalid URL");
        };

        let fetched = self.fetcher.fetch_page(&normalized).await?;

        let request = RequestEcho {
            input_url: input_url.to_string(),
            final_url: fetched.final_url.clone(),
            status: fetched.status,
            content_type: fetched.content_type.clone(),
        };

        if fetched.body.is_empty() || !fetcher::is_html(&fetched.content_type) {
            tracing::warn!(
                url = %fetched.final_url,
                content_type = %fetched.content_type,
                "Response is not analyzable HTML"
            );
            return Ok(AnalysisReport {
                request,
                error: Some("Content is not HTML or could not be fetched.".to_string()),
                body: None,
                generated_at: Utc::now().to_rfc3339(),
            });
        }

        // scraper's DOM is not Send, so all document work happens in this
        // block before the first await point.
        let (analysis, body_text) = {
            let document = Html::parse_document(&fetched.body);
            let base = Url::parse(&fetched.final_url)
                .with_context(|| format!("Unparseable final URL {}", fetched.final_url))?;

            let page = extractor::extract_signals(&document, &fetched.final_url);
            let social = extractor::extract_social(&document);
            let structured_data = extractor::extract_structured_data(&document);
            let assets = extractor::extract_assets(&document);
            let links = links::summarize(&self.classifier.classify(&document, &base));
            let quality_hints = extractor::quality_hints(&page, &social, &structured_data);
            let body_text = extractor::extract_body_text(&document);

            (
                PageAnalysis {
                    page,
                    social,
                    structured_data,
                    assets,
                    links,
                    quality_hints,
                },
                body_text,
            )
        };

        let (robots_info, link_statuses) = tokio::join!(
            robots::probe(&self.fetcher, &fetched.final_url),
            self.link_checker.check_statuses(&analysis.links.sample),
        );

        let score = scorer::compute(
            &analysis.page,
            &analysis.social,
            &analysis.structured_data,
            &analysis.links,
            &robots_info,
            &link_statuses,
        );

        let keyword_suggestions = keywords::suggest(
            &body_text,
            &analysis.page.title,
            &analysis.page.meta_description,
            analysis.page.word_count,
        );

        let recommendations = dedup_recommendations(&analysis.quality_hints, &score.tips);

        Ok(AnalysisReport {
            request,
            error: None,
            body: Some(ReportBody {
                analysis,
                robots: robots_info,
                link_statuses,
                recommendations,
                score,
                keyword_suggestions,
            }),
            generated_at: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_absolute_urls() {
        assert_eq!(
            normalize_url("https://example.com/a?b=1").as_deref(),
            Some("https://example.com/a?b=1")
        );
    }

    #[test]
    fn normalize_prefixes_https_for_bare_hosts() {
        assert_eq!(
            normalize_url("example.com").as_deref(),
            Some("https://example.com/")
        );
        assert_eq!(
            normalize_url("example.com/path?q=1").as_deref(),
            Some("https://example.com/path?q=1")
        );
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert_eq!(normalize_url("ht tp://nope"), None);
        assert_eq!(normalize_url(""), None);
    }

    #[test]
    fn normalize_treats_host_port_shorthand_as_a_scheme() {
        // "localhost:3000" parses with scheme "localhost"; the fetch will
        // fail later rather than the URL being rewritten
        assert_eq!(
            normalize_url("localhost:3000").as_deref(),
            Some("localhost:3000")
        );
    }

    #[test]
    fn recommendations_deduplicate_preserving_first_occurrence() {
        let hints = vec!["Missing H1.".to_string(), "Missing canonical link.".to_string()];
        let tips = vec![
            "Missing H1.".to_string(),
            "Add descriptive alt text to images.".to_string(),
        ];
        assert_eq!(
            dedup_recommendations(&hints, &tips),
            vec![
                "Missing H1.".to_string(),
                "Missing canonical link.".to_string(),
                "Add descriptive alt text to images.".to_string(),
            ]
        );
    }
}
