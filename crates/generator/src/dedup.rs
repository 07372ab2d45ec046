use std::collections::HashSet;

use cramdeck_core::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// Longest answer the validation gate admits; longer candidates are
/// low-quality wall-of-text captures.
pub(crate) const MAX_ANSWER_CHARS: usize = 300;

//
// ─── VALIDATION / UNIQUENESS GATE ─────────────────────────────────────────────
//

/// Shared gate every strategy's candidates pass through before becoming
/// cards. Tracks question text already used in this generation run.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the candidate passes validation and its question has not
    /// been seen before. First occurrence wins; a duplicate is dropped,
    /// never merged into the earlier card.
    pub fn admit(&mut self, question: &str, answer: &str) -> bool {
        if question.is_empty() || answer.is_empty() {
            return false;
        }
        if answer.chars().count() > MAX_ANSWER_CHARS {
            return false;
        }
        if self.seen.contains(question) {
            return false;
        }
        self.seen.insert(question.to_string());
        true
    }
}

//
// ─── LIMIT ────────────────────────────────────────────────────────────────────
//

/// How many cards a generation run may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLimit {
    /// Return every deduplicated card.
    All,
    /// Truncate to at most this many cards.
    Max(usize),
}

impl CardLimit {
    /// Interprets the external integer contract: any negative value
    /// (`-1` by convention) means unlimited, any non-negative value
    /// truncates.
    #[must_use]
    pub fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            Self::All
        } else {
            Self::Max(raw as usize)
        }
    }
}

impl Default for CardLimit {
    fn default() -> Self {
        Self::Max(20)
    }
}

//
// ─── FINALIZER ────────────────────────────────────────────────────────────────
//

/// Final pass over admitted cards: drop any stray duplicate questions
/// (first occurrence wins), shuffle so strategy order does not dictate
/// study order, then cut to the limit. The front slice of a full shuffle
/// is a uniform random sample.
#[must_use]
pub fn finalize<R: Rng + ?Sized>(cards: Vec<Card>, limit: CardLimit, rng: &mut R) -> Vec<Card> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Card> = cards
        .into_iter()
        .filter(|card| seen.insert(card.question.clone()))
        .collect();

    unique.shuffle(rng);

    match limit {
        CardLimit::All => unique,
        CardLimit::Max(max) => {
            unique.truncate(max);
            unique
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cramdeck_core::{CardId, CardSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn card(id: u64, question: &str) -> Card {
        Card::new(CardId::new(id), question, "answer", CardSource::Cloze)
    }

    #[test]
    fn gate_rejects_empty_sides_and_long_answers() {
        let mut gate = Deduplicator::new();
        assert!(!gate.admit("", "answer"));
        assert!(!gate.admit("question", ""));
        assert!(!gate.admit("question", &"x".repeat(301)));
        assert!(gate.admit("question", &"x".repeat(300)));
    }

    #[test]
    fn gate_drops_repeated_questions_first_seen_wins() {
        let mut gate = Deduplicator::new();
        assert!(gate.admit("q", "first"));
        assert!(!gate.admit("q", "second"));
        assert!(gate.admit("other", "third"));
    }

    #[test]
    fn finalize_yields_pairwise_distinct_questions() {
        let cards = vec![card(1, "a"), card(2, "b"), card(3, "a"), card(4, "c")];
        let mut rng = StdRng::seed_from_u64(3);
        let out = finalize(cards, CardLimit::All, &mut rng);

        assert_eq!(out.len(), 3);
        let questions: HashSet<&str> = out.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions.len(), 3);
        // first occurrence won
        assert!(out.iter().any(|c| c.question == "a" && c.id == CardId::new(1)));
    }

    #[test]
    fn all_sentinel_returns_everything() {
        let cards: Vec<Card> = (0..10).map(|i| card(i, &format!("q{i}"))).collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(finalize(cards, CardLimit::All, &mut rng).len(), 10);
    }

    #[test]
    fn max_limit_truncates_after_the_shuffle() {
        let cards: Vec<Card> = (0..10).map(|i| card(i, &format!("q{i}"))).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let out = finalize(cards, CardLimit::Max(4), &mut rng);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn shuffle_is_reproducible_with_a_seeded_rng() {
        let cards: Vec<Card> = (0..10).map(|i| card(i, &format!("q{i}"))).collect();
        let first = finalize(cards.clone(), CardLimit::All, &mut StdRng::seed_from_u64(42));
        let second = finalize(cards, CardLimit::All, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn from_raw_maps_negative_values_to_unlimited() {
        assert_eq!(CardLimit::from_raw(-1), CardLimit::All);
        assert_eq!(CardLimit::from_raw(-7), CardLimit::All);
        assert_eq!(CardLimit::from_raw(0), CardLimit::Max(0));
        assert_eq!(CardLimit::from_raw(5), CardLimit::Max(5));
    }
}
