use cramdeck_core::CardSource;
use regex::Regex;

use crate::strategy::{Candidate, GenerationStrategy, QuestionStyle, StrategyContext};

/// Blank marker substituted for the removed keyword.
pub const BLANK: &str = "__________";

const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SENTENCE_CHARS: usize = 200;
const MIN_KEYWORD_CHARS: usize = 4;

/// Fill-in-the-blank cards: for each sentence of workable length, the
/// highest-ranked keyword occurring in it is blanked out. At most one
/// cloze card per sentence.
pub struct ClozeStrategy;

impl GenerationStrategy for ClozeStrategy {
    fn name(&self) -> &'static str {
        "cloze"
    }

    fn generate(&self, ctx: &StrategyContext<'_>, out: &mut Vec<Candidate>) {
        // one whole-word, case-insensitive matcher per usable keyword,
        // compiled once and reused across sentences
        let matchers: Vec<(&String, Regex)> = ctx
            .keywords
            .iter()
            .filter(|k| k.chars().count() >= MIN_KEYWORD_CHARS)
            .filter_map(|keyword| {
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
                    .ok()
                    .map(|re| (keyword, re))
            })
            .collect();

        for sentence in ctx.sentences {
            let length = sentence.chars().count();
            if !(MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&length) {
                continue;
            }

            for (keyword, matcher) in &matchers {
                let Some(found) = matcher.find(sentence) else {
                    continue;
                };

                let mut blanked = String::with_capacity(sentence.len());
                blanked.push_str(&sentence[..found.start()]);
                blanked.push_str(BLANK);
                blanked.push_str(&sentence[found.end()..]);

                let question = match ctx.style {
                    QuestionStyle::Prompted => {
                        format!("Complete the sentence:\n\"{blanked}\"")
                    }
                    QuestionStyle::Plain => blanked,
                };
                out.push(Candidate {
                    question,
                    answer: (*keyword).clone(),
                    source: CardSource::Cloze,
                });
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::context;

    fn run(sentences: &[&str], keywords: &[&str]) -> Vec<Candidate> {
        let sentences: Vec<String> = sentences.iter().map(|s| s.to_string()).collect();
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        let mut out = Vec::new();
        ClozeStrategy.generate(&context("", &sentences, &keywords), &mut out);
        out
    }

    #[test]
    fn blanks_the_first_matching_keyword() {
        let cards = run(
            &["Plants use photosynthesis to make food."],
            &["Photosynthesis", "Plants"],
        );
        assert_eq!(cards.len(), 1);
        assert!(cards[0].question.contains("__________"));
        assert!(cards[0].question.contains("Plants use"));
        assert_eq!(cards[0].answer, "Photosynthesis");
    }

    #[test]
    fn at_most_one_cloze_card_per_sentence() {
        let cards = run(
            &["Plants use photosynthesis and chlorophyll together."],
            &["Photosynthesis", "Chlorophyll", "Plants"],
        );
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn matches_whole_words_case_insensitively() {
        let cards = run(
            &["The cellular membrane keeps cells intact always."],
            &["Cell"],
        );
        // "Cell" must not blank inside "cellular" or "cells"
        assert!(cards.is_empty());
    }

    #[test]
    fn skips_sentences_outside_the_length_window() {
        let long = "word ".repeat(50);
        let cards = run(&["Tiny plants here.", long.trim()], &["Plants", "Word"]);
        assert!(cards.is_empty());
    }

    #[test]
    fn short_keywords_are_ignored() {
        let cards = run(&["The big dog ran across the yard today."], &["Dog", "Big"]);
        assert!(cards.is_empty());
    }
}
