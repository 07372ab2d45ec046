use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("valid whitespace regex"));
static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

/// Fixed find/replace table for UTF-8-read-as-Latin-1 artifacts.
///
/// These are literal substitutions, not decoding logic. Multi-character
/// artifacts come before the bare `â€` fallback so the longer forms are
/// repaired first.
const MOJIBAKE_FIXES: &[(&str, &str)] = &[
    ("â€™", "'"),
    ("â€œ", "\""),
    ("â€\u{9d}", "\""),
    ("â€\u{201d}", "—"),
    ("â€\u{201c}", "–"),
    ("â€¢", "•"),
    ("â€¦", "..."),
    ("Ã©", "é"),
    ("Ã¡", "á"),
    ("Ã\u{ad}", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã±", "ñ"),
    ("â€", "\""),
];

/// Cleans raw extracted text: collapses whitespace runs, repairs known
/// encoding artifacts, strips control characters, and straightens curly
/// quotes. Idempotent; empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let collapsed = SPACE_RUNS.replace_all(text, " ");
    let mut text = NEWLINE_RUNS.replace_all(&collapsed, "\n\n").into_owned();

    // repair artifacts before stripping control characters, otherwise the
    // control byte inside a three-byte artifact is lost and the sequence
    // no longer matches
    for (artifact, replacement) in MOJIBAKE_FIXES {
        if text.contains(artifact) {
            text = text.replace(artifact, replacement);
        }
    }

    let text: String = text
        .chars()
        .filter(|&c| !is_stripped_control(c))
        .map(straighten_quote)
        .collect();

    // a stripped control between whitespace leaves the runs adjacent, so
    // both collapses have to run once more
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// Control characters removed during normalization. Newlines survive
/// because sentence segmentation treats them as boundaries.
fn is_stripped_control(c: char) -> bool {
    let v = c as u32;
    (v <= 0x1F && c != '\n') || (0x7F..=0x9F).contains(&v)
}

fn straighten_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        other => other,
    }
}
