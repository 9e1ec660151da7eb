use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEcho {
    pub input_url: String,
    pub final_url: String,
    pub status: u16,
    pub content_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignals {
    pub url: String,
    pub title: String,
    pub title_length: usize,
    pub meta_description: String,
    pub meta_description_length: usize,
    pub meta_robots: String,
    pub canonical: String,
    pub viewport_present: bool,
    pub lang: String,
    pub h1_count: usize,
    pub h1_samples: Vec<String>,
    pub images: ImageStats,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total: usize,
    pub without_alt: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialTags {
    pub og: OpenGraphTags,
    pub twitter: TwitterTags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenGraphTags {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub og_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TwitterTags {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    pub ld_json_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assets {
    pub favicon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    pub sample: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkStatus {
    pub href: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
    // 0 means the probe failed or timed out
    pub status: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCheckSummary {
    pub checked: usize,
    pub broken_count: usize,
    pub sample: Vec<LinkStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsInfo {
    pub robots_url: String,
    pub robots_txt: String,
    pub sitemap_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub item: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub total: u32,
    pub breakdown: Vec<BreakdownEntry>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSuggestion {
    pub action: String,
    pub reason: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSuggestions {
    pub top_keywords: Vec<KeywordCount>,
    pub suggested_content: Vec<ContentSuggestion>,
    pub keyword_gaps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAnalysis {
    pub page: PageSignals,
    pub social: SocialTags,
    pub structured_data: StructuredData,
    pub assets: Assets,
    pub links: LinkSummary,
    pub quality_hints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBody {
    #[serde(flatten)]
    pub analysis: PageAnalysis,
    pub robots: RobotsInfo,
    pub link_statuses: LinkCheckSummary,
    pub recommendations: Vec<String>,
    pub score: ScoreReport,
    pub keyword_suggestions: KeywordSuggestions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub request: RequestEcho,
    // Set only for non-HTML or otherwise unanalyzable responses; the body
    // sections are absent in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub body: Option<ReportBody>,
    pub generated_at: String,
}
