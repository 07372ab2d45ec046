use once_cell::sync::Lazy;
use regex::Regex;

/// Abbreviations whose trailing period must not end a sentence.
static ABBREVIATIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(Dr|Mr|Mrs|Ms|Prof|Sr|Jr|vs|e\.g|i\.e|Fig)\.")
        .expect("valid abbreviation regex")
});

/// A sentence boundary: terminal punctuation followed by whitespace
/// (punctuation stays with the preceding sentence), or a newline run.
static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+|\n+").expect("valid boundary regex"));

/// Placeholder for a protected abbreviation period while splitting.
const DOT_TOKEN: &str = "_DOT_";

const MIN_SENTENCE_CHARS: usize = 10;
const MIN_SENTENCE_WORDS: usize = 3;

/// Segments normalized text into candidate sentences.
///
/// Abbreviation periods are swapped for a placeholder before splitting and
/// restored afterwards, so "Dr. Smith" never produces a boundary.
/// Candidates shorter than 10 characters, without a letter, or with fewer
/// than 3 words are discarded. Empty input yields an empty vector.
#[must_use]
pub fn split(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let protected = ABBREVIATIONS.replace_all(text, format!("${{1}}{DOT_TOKEN}").as_str());

    let mut sentences = Vec::new();
    let mut last = 0;
    for boundary in BOUNDARY.find_iter(&protected) {
        let end = if boundary.as_str().starts_with(['.', '!', '?']) {
            boundary.start() + 1
        } else {
            boundary.start()
        };
        push_candidate(&protected[last..end], &mut sentences);
        last = boundary.end();
    }
    push_candidate(&protected[last..], &mut sentences);

    sentences
}

fn push_candidate(raw: &str, out: &mut Vec<String>) {
    let restored = raw.replace(DOT_TOKEN, ".");
    let candidate = restored.trim();

    if candidate.chars().count() < MIN_SENTENCE_CHARS {
        return;
    }
    if !candidate.chars().any(|c| c.is_ascii_alphabetic()) {
        return;
    }
    if candidate.split_whitespace().count() < MIN_SENTENCE_WORDS {
        return;
    }

    out.push(candidate.to_string());
}
