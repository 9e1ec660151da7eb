use std::collections::HashMap;

use crate::models::{ContentSuggestion, KeywordCount, KeywordSuggestions};

/// Body tokens shorter than this never count as keywords.
const BODY_TOKEN_MIN: usize = 4;
/// Title and description tokens shorter than this never count as current
/// keywords.
const META_TOKEN_MIN: usize = 3;

/// Lower-cased ASCII-alphabetic runs of at least `min_len` characters, in
/// order of appearance.
fn tokenize(text: &str, min_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|ch: char| !ch.is_ascii_alphabetic())
        .filter(|token| token.len() >= min_len)
        .map(str::to_string)
        .collect()
}

/// Term frequency over the page body compared against the title and
/// description vocabulary. `word_count` is the page's full word count,
/// which drives the expand-content suggestion.
pub fn suggest(
    body_text: &str,
    title: &str,
    description: &str,
    word_count: usize,
) -> KeywordSuggestions {
    // Counts keep first-seen order; the index is only a lookup aid. A
    // stable sort then guarantees reproducible ordering among ties.
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in tokenize(body_text, BODY_TOKEN_MIN) {
        match index.get(&token) {
            Some(&at) => counts[at].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let top_keywords: Vec<KeywordCount> = counts
        .iter()
        .take(10)
        .map(|(word, count)| KeywordCount {
            word: word.clone(),
            count: *count,
        })
        .collect();

    let mut current_keywords = tokenize(title, META_TOKEN_MIN);
    current_keywords.extend(tokenize(description, META_TOKEN_MIN));

    let mut suggested_content = Vec::new();
    if word_count < 200 {
        suggested_content.push(ContentSuggestion {
            action: "Expand content".to_string(),
            reason: format!(
                "Current word count is {word_count}. Aim for 200+ words for better SEO."
            ),
            suggestions: vec![
                "Add detailed descriptions".to_string(),
                "Include FAQ section".to_string(),
                "Add more context about the topic".to_string(),
            ],
        });
    }
    if description.chars().count() < 50 {
        suggested_content.push(ContentSuggestion {
            action: "Improve meta description".to_string(),
            reason: "Meta description is missing or too short.".to_string(),
            suggestions: vec![
                "Write a compelling 50-160 character description".to_string(),
                "Include primary keywords".to_string(),
                "Add a call-to-action".to_string(),
            ],
        });
    }

    let keyword_gaps: Vec<String> = counts
        .iter()
        .take(5)
        .map(|(word, _)| word)
        .filter(|word| !current_keywords.contains(*word))
        .take(3)
        .cloned()
        .collect();

    KeywordSuggestions {
        top_keywords,
        suggested_content,
        keyword_gaps,
    }
}
