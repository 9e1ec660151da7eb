use crate::models::{
    BreakdownEntry, LinkCheckSummary, LinkSummary, PageSignals, RobotsInfo, ScoreReport,
    SocialTags, StructuredData,
};

#[derive(Default)]
struct ScoreCard {
    score: u32,
    breakdown: Vec<BreakdownEntry>,
    tips: Vec<String>,
}

impl ScoreCard {
    /// A passed rule earns its points under the success label; a failed
    /// rule records a zero-point breakdown entry and surfaces its tip.
    fn rule(&mut self, passed: bool, points: u32, success: &str, tip: &str) {
        if passed {
            self.score += points;
            self.breakdown.push(BreakdownEntry {
                item: success.to_string(),
                points,
            });
        } else {
            self.breakdown.push(BreakdownEntry {
                item: tip.to_string(),
                points: 0,
            });
            self.tips.push(tip.to_string());
        }
    }

    /// Bonuses only appear in the breakdown when earned.
    fn bonus(&mut self, earned: bool, points: u32, success: &str, tip: &str) {
        if earned {
            self.score += points;
            self.breakdown.push(BreakdownEntry {
                item: success.to_string(),
                points,
            });
        } else {
            self.tips.push(tip.to_string());
        }
    }
}

/// Applies the weighted rubric to the extracted signals. The twelve rule
/// weights sum to 90 and the internal-links bonus adds 4, so a fully
/// optimized page scores 94 of the nominal 100.
pub fn compute(
    page: &PageSignals,
    social: &SocialTags,
    structured: &StructuredData,
    links: &LinkSummary,
    robots: &RobotsInfo,
    link_statuses: &LinkCheckSummary,
) -> ScoreReport {
    let mut card = ScoreCard::default();

    card.rule(
        page.title_length >= 10 && page.title_length <= 60,
        10,
        "Good title length",
        "Set a concise, descriptive title (~10–60 chars).",
    );
    card.rule(
        page.meta_description_length >= 50 && page.meta_description_length <= 160,
        10,
        "Meta description present",
        "Add a compelling meta description (~50–160 chars).",
    );
    card.rule(
        page.h1_count == 1,
        8,
        "Single H1 present",
        "Use exactly one H1 that reflects page topic.",
    );
    card.rule(
        page.viewport_present,
        6,
        "Mobile viewport set",
        "Add a responsive viewport meta tag.",
    );
    card.rule(
        !page.canonical.is_empty(),
        6,
        "Canonical set",
        "Add a canonical URL to avoid duplicates.",
    );
    card.rule(
        !page.lang.is_empty(),
        4,
        "Lang attribute set",
        "Set the lang attribute on <html>.",
    );
    card.rule(
        page.images.without_alt == 0,
        8,
        "Images have alt text",
        "Add descriptive alt text to images.",
    );
    card.rule(
        page.word_count >= 200,
        6,
        "Sufficient on-page text",
        "Increase helpful textual content (aim 200+ words).",
    );
    card.rule(
        !social.og.title.is_empty() || !social.twitter.title.is_empty(),
        6,
        "Social tags present",
        "Add Open Graph/Twitter card tags for rich sharing.",
    );
    card.rule(
        structured.ld_json_count > 0,
        10,
        "Structured data present",
        "Add relevant schema.org JSON-LD.",
    );
    card.rule(
        !robots.robots_url.is_empty() && !robots.robots_txt.is_empty(),
        6,
        "robots.txt accessible",
        "Expose a valid robots.txt at /robots.txt.",
    );
    card.rule(
        link_statuses.broken_count == 0,
        10,
        "No broken links detected (sample)",
        "Fix broken internal/external links.",
    );

    card.bonus(
        links.internal > 0,
        4,
        "Internal links present",
        "Add internal links to distribute PageRank and context.",
    );

    ScoreReport {
        score: card.score.min(100),
        total: 100,
        breakdown: card.breakdown,
        tips: card.tips,
    }
}
