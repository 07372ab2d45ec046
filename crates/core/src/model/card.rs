use serde::{Deserialize, Serialize};

use crate::model::ids::CardId;
use crate::model::review::ReviewState;

//
// ─── CARD SOURCE ──────────────────────────────────────────────────────────────
//

/// Which generation strategy produced a card.
///
/// Carried for diagnostics and display only; it has no effect on studying
/// or scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSource {
    /// Term → definition extracted from "X is/means/refers to ..." phrasing.
    Definition,
    /// Definition → term, the inverse pairing over a stricter match subset.
    Reverse,
    /// Fill-in-the-blank sentence with a keyword removed.
    Cloze,
    /// Consecutive-sentence chunk used as a fallback.
    Chunk,
}

//
// ─── CARD ─────────────────────────────────────────────────────────────────────
//

/// A single flashcard, the persistent unit of the system.
///
/// Serialized with camelCase field names so the shape matches what the
/// browser client stores. Scheduling state is flattened in and absent
/// until the card is first graded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    pub source: CardSource,
    #[serde(default)]
    pub mastered: bool,
    #[serde(default)]
    pub review_later: bool,
    /// Optional user-attached image (opaque data URI), never produced by
    /// the generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_image: Option<String>,
    #[serde(flatten)]
    pub review: Option<ReviewState>,
}

impl Card {
    /// Creates a fresh, never-reviewed card with default flags.
    #[must_use]
    pub fn new(
        id: CardId,
        question: impl Into<String>,
        answer: impl Into<String>,
        source: CardSource,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            source,
            mastered: false,
            review_later: false,
            question_image: None,
            answer_image: None,
            review: None,
        }
    }

    /// Marks the card mastered. Mastered and review-later are mutually
    /// exclusive, so setting one clears the other.
    pub fn set_mastered(&mut self, mastered: bool) {
        self.mastered = mastered;
        if mastered {
            self.review_later = false;
        }
    }

    /// Flags the card for later review, clearing mastered.
    pub fn set_review_later(&mut self, review_later: bool) {
        self.review_later = review_later;
        if review_later {
            self.mastered = false;
        }
    }

    /// True once the card has been graded at least once.
    #[must_use]
    pub fn is_reviewed(&self) -> bool {
        self.review.is_some()
    }

    /// Current ease factor, falling back to the SM-2 default of 2.5 for
    /// cards that have never been graded.
    #[must_use]
    pub fn ease_factor(&self) -> f64 {
        self.review
            .as_ref()
            .map_or(crate::scheduler::DEFAULT_EASE_FACTOR, |r| r.ease_factor)
    }

    /// Repetition count, zero for ungraded cards.
    #[must_use]
    pub fn repetitions(&self) -> u32 {
        self.review.as_ref().map_or(0, |r| r.repetitions)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(
            CardId::new(1),
            "What is the definition of \"Photosynthesis\"?",
            "the process by which plants convert light into energy",
            CardSource::Definition,
        )
    }

    #[test]
    fn new_card_has_default_flags_and_no_review_state() {
        let card = card();
        assert!(!card.mastered);
        assert!(!card.review_later);
        assert!(!card.is_reviewed());
        assert_eq!(card.repetitions(), 0);
        assert_eq!(card.ease_factor(), 2.5);
    }

    #[test]
    fn mastered_and_review_later_are_mutually_exclusive() {
        let mut card = card();

        card.set_review_later(true);
        card.set_mastered(true);
        assert!(card.mastered);
        assert!(!card.review_later);

        card.set_review_later(true);
        assert!(!card.mastered);
        assert!(card.review_later);
    }

    #[test]
    fn clearing_a_flag_leaves_the_other_untouched() {
        let mut card = card();
        card.set_mastered(true);
        card.set_mastered(false);
        assert!(!card.mastered);
        assert!(!card.review_later);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let card = card();
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["source"], "definition");
        assert_eq!(json["reviewLater"], false);
        // unreviewed cards carry no scheduling fields
        assert!(json.get("easeFactor").is_none());
        assert!(json.get("nextReviewDate").is_none());
        assert!(json.get("questionImage").is_none());
    }

    #[test]
    fn deserializes_a_card_without_optional_fields() {
        let json = r#"{
            "id": 7,
            "question": "Q",
            "answer": "A",
            "source": "cloze"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.source, CardSource::Cloze);
        assert!(!card.mastered);
        assert!(card.review.is_none());
    }
}
