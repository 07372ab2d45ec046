use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Word tokens: runs of 3+ lowercase letters. Digits and punctuation act
/// as delimiters, so mixed fragments never qualify.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("valid word regex"));

/// Common English function words excluded from keyword ranking.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "is", "are", "was", "were", "in", "on", "at", "to", "for", "of", "and", "or",
        "but", "with", "from", "by", "this", "that", "these", "those", "will", "can", "could",
        "would", "should", "have", "has", "had", "been", "about", "which", "when", "what",
        "where", "who", "how", "why", "there", "their", "they", "them", "does", "did", "not",
        "also", "than", "then", "just", "only", "very", "much", "many", "some", "any", "into",
        "over", "under",
    ]
    .into_iter()
    .collect()
});

pub const DEFAULT_KEYWORD_LIMIT: usize = 30;

/// Extracts a frequency-ranked keyword list from the text.
///
/// Tokens are lowercased, stopwords dropped, and counts below
/// `min_frequency` discarded. The result is sorted by descending count
/// (ties keep first-occurrence order), truncated to `limit`, and each
/// surviving token capitalized for display.
#[must_use]
pub fn extract(text: &str, min_frequency: usize, limit: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for token in WORD.find_iter(&lowered) {
        let word = token.as_str();
        if STOPWORDS.contains(word) {
            continue;
        }
        match index.get(word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts.retain(|&(_, count)| count >= min_frequency);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(word, _)| capitalize(word))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_keywords() {
        assert!(extract("", 1, DEFAULT_KEYWORD_LIMIT).is_empty());
    }

    #[test]
    fn excludes_stopwords() {
        let got = extract(
            "the cell is the unit of the organism and the cell divides",
            1,
            DEFAULT_KEYWORD_LIMIT,
        );
        for keyword in &got {
            assert!(
                !STOPWORDS.contains(keyword.to_lowercase().as_str()),
                "stopword leaked: {keyword}"
            );
        }
        assert!(got.contains(&"Cell".to_string()));
    }

    #[test]
    fn ranks_by_descending_frequency() {
        let got = extract("osmosis osmosis osmosis membrane membrane water", 1, 10);
        assert_eq!(got, vec!["Osmosis", "Membrane", "Water"]);
    }

    #[test]
    fn min_frequency_threshold_filters_rare_tokens() {
        let got = extract("osmosis osmosis membrane", 2, 10);
        assert_eq!(got, vec!["Osmosis"]);
    }

    #[test]
    fn truncates_to_limit() {
        let got = extract("alpha beta gamma delta epsilon", 1, 2);
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn short_and_nonletter_tokens_are_delimited_out() {
        let got = extract("ab x1y 12ab cd photosynthesis", 1, 10);
        assert_eq!(got, vec!["Photosynthesis"]);
    }

    #[test]
    fn output_is_capitalized() {
        let got = extract("mitochondria mitochondria", 1, 10);
        assert_eq!(got, vec!["Mitochondria"]);
    }
}
