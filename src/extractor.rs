use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::models::{
    Assets, ImageStats, OpenGraphTags, PageSignals, SocialTags, StructuredData, TwitterTags,
};

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("head > title").expect("title selector should be valid"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static META_ROBOTS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='robots']").expect("meta robots selector should be valid")
});
static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel='canonical']").expect("canonical selector should be valid")
});
static VIEWPORT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='viewport']").expect("viewport selector should be valid")
});
static HTML_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("html").expect("html selector should be valid"));
static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("h1 selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));
static OG_TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:title']").expect("og:title selector should be valid")
});
static OG_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:description']")
        .expect("og:description selector should be valid")
});
static OG_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:image']").expect("og:image selector should be valid")
});
static OG_TYPE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:type']").expect("og:type selector should be valid")
});
static TWITTER_CARD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='twitter:card']").expect("twitter:card selector should be valid")
});
static TWITTER_TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='twitter:title']").expect("twitter:title selector should be valid")
});
static TWITTER_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='twitter:description']")
        .expect("twitter:description selector should be valid")
});
static TWITTER_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='twitter:image']").expect("twitter:image selector should be valid")
});
static LD_JSON_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']")
        .expect("ld+json selector should be valid")
});
static FAVICON_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel='icon'], link[rel='shortcut icon'], link[rel='apple-touch-icon']")
        .expect("favicon selector should be valid")
});

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn first_content(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Extracts the on-page signals that feed scoring and quality hints.
/// Missing elements come back as empty strings or zero counts.
pub fn extract_signals(document: &Html, url: &str) -> PageSignals {
    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();
    let meta_description = normalize_whitespace(&first_content(document, &META_DESC_SELECTOR));
    let meta_robots = normalize_whitespace(&first_content(document, &META_ROBOTS_SELECTOR));
    let canonical = document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default()
        .to_string();
    let viewport_present = !first_content(document, &VIEWPORT_SELECTOR).is_empty();
    let lang = document
        .select(&HTML_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .unwrap_or_default()
        .to_string();

    let h1s: Vec<String> = document
        .select(&H1_SELECTOR)
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .collect();
    let h1_count = h1s.len();
    let mut h1_samples = h1s;
    h1_samples.truncate(5);

    let mut images = ImageStats::default();
    for img in document.select(&IMG_SELECTOR) {
        images.total += 1;
        // Missing alt and whitespace-only alt both count as missing
        if img.value().attr("alt").unwrap_or("").trim().is_empty() {
            images.without_alt += 1;
        }
    }

    let word_count = extract_body_text(document).split_whitespace().count();

    let title_length = title.chars().count();
    let meta_description_length = meta_description.chars().count();

    PageSignals {
        url: url.to_string(),
        title,
        title_length,
        meta_description,
        meta_description_length,
        meta_robots,
        canonical,
        viewport_present,
        lang,
        h1_count,
        h1_samples,
        images,
        word_count,
    }
}

/// Normalized text content of `<body>`, scripts and styles included,
/// the same view of the page the word count and keyword analysis use.
pub fn extract_body_text(document: &Html) -> String {
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

pub fn extract_social(document: &Html) -> SocialTags {
    SocialTags {
        og: OpenGraphTags {
            title: first_content(document, &OG_TITLE_SELECTOR),
            description: first_content(document, &OG_DESC_SELECTOR),
            image: first_content(document, &OG_IMAGE_SELECTOR),
            og_type: first_content(document, &OG_TYPE_SELECTOR),
        },
        twitter: TwitterTags {
            card: first_content(document, &TWITTER_CARD_SELECTOR),
            title: first_content(document, &TWITTER_TITLE_SELECTOR),
            description: first_content(document, &TWITTER_DESC_SELECTOR),
            image: first_content(document, &TWITTER_IMAGE_SELECTOR),
        },
    }
}

pub fn extract_structured_data(document: &Html) -> StructuredData {
    StructuredData {
        ld_json_count: document.select(&LD_JSON_SELECTOR).count(),
    }
}

pub fn extract_assets(document: &Html) -> Assets {
    Assets {
        favicon: document
            .select(&FAVICON_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("href"))
            .unwrap_or_default()
            .to_string(),
    }
}

/// Human-readable warnings about weak or missing signals, in a fixed order.
pub fn quality_hints(
    page: &PageSignals,
    social: &SocialTags,
    structured: &StructuredData,
) -> Vec<String> {
    let mut hints = Vec::new();

    if page.title.is_empty() {
        hints.push("Missing <title> tag.".to_string());
    } else if page.title_length < 10 || page.title_length > 60 {
        hints.push("Title length should be ~10-60 chars.".to_string());
    }

    if page.meta_description.is_empty() {
        hints.push("Missing meta description.".to_string());
    } else if page.meta_description_length < 50 || page.meta_description_length > 160 {
        hints.push("Meta description should be ~50-160 chars.".to_string());
    }

    if page.h1_count == 0 {
        hints.push("Missing H1.".to_string());
    } else if page.h1_count > 1 {
        hints.push("Multiple H1s found.".to_string());
    }

    if page.images.without_alt > 0 {
        hints.push(format!("{} images without alt.", page.images.without_alt));
    }

    if !page.viewport_present {
        hints.push("Missing viewport meta (mobile friendliness).".to_string());
    }

    if page.canonical.is_empty() {
        hints.push("Missing canonical link.".to_string());
    }

    if social.og.title.is_empty() && social.twitter.title.is_empty() {
        hints.push("Missing Open Graph/Twitter tags.".to_string());
    }

    if structured.ld_json_count == 0 {
        hints.push("No structured data (ld+json) detected.".to_string());
    }

    if page.lang.is_empty() {
        hints.push("Missing lang attribute on <html>.".to_string());
    }

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn extracts_signals_from_complete_page() {
        let document = parse(
            r#"<!DOCTYPE html>
            <html lang="en">
            <head>
                <title>  My    Example
                Page Title Here  </title>
                <meta name="description" content="A fine description of the example page that is long enough to be useful for readers.">
                <meta name="robots" content="index, follow">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <link rel="canonical" href="https://example.com/page">
                <link rel="shortcut icon" href="/favicon.ico">
            </head>
            <body>
                <h1>Main Heading</h1>
                <img src="a.png" alt="first image">
                <img src="b.png" alt="   ">
                <img src="c.png">
                <p>Some body copy here.</p>
            </body>
            </html>"#,
        );

        let page = extract_signals(&document, "https://example.com/page");
        assert_eq!(page.url, "https://example.com/page");
        assert_eq!(page.title, "My Example Page Title Here");
        assert_eq!(page.title_length, 26);
        assert!(page.meta_description.starts_with("A fine description"));
        assert_eq!(page.meta_robots, "index, follow");
        assert_eq!(page.canonical, "https://example.com/page");
        assert!(page.viewport_present);
        assert_eq!(page.lang, "en");
        assert_eq!(page.h1_count, 1);
        assert_eq!(page.h1_samples, vec!["Main Heading".to_string()]);
        assert_eq!(page.images.total, 3);
        assert_eq!(page.images.without_alt, 2);
        assert!(page.word_count > 0);
    }

    #[test]
    fn missing_elements_yield_empty_signals() {
        let document = parse("<html><head></head><body></body></html>");
        let page = extract_signals(&document, "https://example.com/");
        assert_eq!(page.title, "");
        assert_eq!(page.title_length, 0);
        assert_eq!(page.meta_description, "");
        assert_eq!(page.canonical, "");
        assert!(!page.viewport_present);
        assert_eq!(page.lang, "");
        assert_eq!(page.h1_count, 0);
        assert_eq!(page.images.total, 0);
        assert_eq!(page.word_count, 0);
    }

    #[test]
    fn h1_samples_are_capped_at_five() {
        let document = parse(
            "<html><body>\
             <h1>one</h1><h1>two</h1><h1>three</h1>\
             <h1>four</h1><h1>five</h1><h1>six</h1>\
             </body></html>",
        );
        let page = extract_signals(&document, "https://example.com/");
        assert_eq!(page.h1_count, 6);
        assert_eq!(page.h1_samples.len(), 5);
        assert_eq!(page.h1_samples[4], "five");
    }

    #[test]
    fn empty_viewport_content_does_not_count_as_present() {
        let document = parse(
            "<html><head><meta name=\"viewport\" content=\"\"></head><body></body></html>",
        );
        let page = extract_signals(&document, "https://example.com/");
        assert!(!page.viewport_present);
    }

    #[test]
    fn extracts_social_and_structured_data() {
        let document = parse(
            r#"<html><head>
            <meta property="og:title" content="OG Title">
            <meta property="og:type" content="article">
            <meta name="twitter:card" content="summary">
            <script type="application/ld+json">{"@type":"Article"}</script>
            <script type="application/ld+json">{"@type":"Org"}</script>
            </head><body></body></html>"#,
        );

        let social = extract_social(&document);
        assert_eq!(social.og.title, "OG Title");
        assert_eq!(social.og.og_type, "article");
        assert_eq!(social.twitter.card, "summary");
        assert_eq!(social.twitter.title, "");

        let structured = extract_structured_data(&document);
        assert_eq!(structured.ld_json_count, 2);
    }

    #[test]
    fn favicon_falls_back_across_rel_variants() {
        let document = parse(
            "<html><head><link rel=\"apple-touch-icon\" href=\"/touch.png\"></head></html>",
        );
        assert_eq!(extract_assets(&document).favicon, "/touch.png");

        let document = parse("<html><head></head></html>");
        assert_eq!(extract_assets(&document).favicon, "");
    }

    #[test]
    fn quality_hints_flag_missing_signals_in_order() {
        let document = parse("<html><head></head><body></body></html>");
        let page = extract_signals(&document, "https://example.com/");
        let social = extract_social(&document);
        let structured = extract_structured_data(&document);

        let hints = quality_hints(&page, &social, &structured);
        assert_eq!(
            hints,
            vec![
                "Missing <title> tag.".to_string(),
                "Missing meta description.".to_string(),
                "Missing H1.".to_string(),
                "Missing viewport meta (mobile friendliness).".to_string(),
                "Missing canonical link.".to_string(),
                "Missing Open Graph/Twitter tags.".to_string(),
                "No structured data (ld+json) detected.".to_string(),
                "Missing lang attribute on <html>.".to_string(),
            ]
        );
    }

    #[test]
    fn quality_hints_flag_out_of_range_lengths() {
        let html = format!(
            "<html lang=\"en\"><head><title>Short</title>\
             <meta name=\"description\" content=\"{}\">\
             </head><body><h1>a</h1><h1>b</h1><img src=\"x.png\"></body></html>",
            "d".repeat(200)
        );
        let document = parse(&html);
        let page = extract_signals(&document, "https://example.com/");
        let social = extract_social(&document);
        let structured = extract_structured_data(&document);

        let hints = quality_hints(&page, &social, &structured);
        assert!(hints.contains(&"Title length should be ~10-60 chars.".to_string()));
        assert!(hints.contains(&"Meta description should be ~50-160 chars.".to_string()));
        assert!(hints.contains(&"Multiple H1s found.".to_string()));
        assert!(hints.contains(&"1 images without alt.".to_string()));
    }
}
