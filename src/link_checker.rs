use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::fetcher::Fetcher;
use crate::models::{Link, LinkCheckSummary, LinkStatus};

/// Probes a bounded sample of links for reachability via HEAD requests.
pub struct LinkChecker {
    fetcher: Fetcher,
    limit: usize,
    progress_bar: Option<ProgressBar>,
}

/// A probe is broken unless it produced a 2xx or 3xx status. Status 0
/// stands for a failed or timed-out probe and therefore counts as broken.
fn is_broken(status: u16) -> bool {
    !(200..400).contains(&status)
}

impl LinkChecker {
    pub fn new(fetcher: Fetcher, limit: usize) -> Self {
        Self {
            fetcher,
            limit,
            progress_bar: None,
        }
    }

    /// Enable progress bar for link checking
    pub fn enable_progress_bar(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner:.cyan} Checking links: {pos}/{len}")
                .expect("Progress bar template should be valid"),
        );
        self.progress_bar = Some(pb);
    }

    /// Checks up to `limit` of the given links concurrently. Probe failures
    /// surface as status 0 rather than errors, so a dead link can never
    /// abort the analysis.
    pub async fn check_statuses(&self, links: &[Link]) -> LinkCheckSummary {
        let sample: Vec<&Link> = links.iter().take(self.limit).collect();

        if let Some(ref pb) = self.progress_bar {
            pb.set_length(sample.len() as u64);
            pb.set_position(0);
        }

        let futures = sample.iter().map(|link| self.probe(link));
        let results: Vec<LinkStatus> = join_all(futures).await;

        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(format!("Checked {} links", results.len()));
        }

        let broken_count = results
            .iter()
            .filter(|result| is_broken(result.status))
            .count();

        LinkCheckSummary {
            checked: results.len(),
            broken_count,
            sample: results.into_iter().take(20).collect(),
        }
    }

    async fn probe(&self, link: &Link) -> LinkStatus {
        let status = self.fetcher.head_status(&link.href).await;
        if status == 0 {
            tracing::debug!(url = %link.href, "Link probe failed");
        }
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
        }
        LinkStatus {
            href: link.href.clone(),
            kind: link.kind,
            status,
        }
    }
}
