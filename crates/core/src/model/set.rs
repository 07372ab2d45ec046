use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::card::Card;
use crate::model::ids::SetId;

//
// ─── SET STATS ────────────────────────────────────────────────────────────────
//

/// Aggregate counts displayed next to a saved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetStats {
    pub total: usize,
    pub mastered: usize,
    pub review: usize,
}

impl SetStats {
    /// Recomputes the counters from a card collection.
    #[must_use]
    pub fn for_cards(cards: &[Card]) -> Self {
        Self {
            total: cards.len(),
            mastered: cards.iter().filter(|c| c.mastered).count(),
            review: cards.iter().filter(|c| c.review_later).count(),
        }
    }
}

//
// ─── CARD SET ─────────────────────────────────────────────────────────────────
//

/// A named, saved collection of cards.
///
/// This is the unit that crosses the persistence boundary; the storage
/// collaborator owns its lifecycle, the core only produces and consumes
/// this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: SetId,
    pub name: String,
    pub date: DateTime<Utc>,
    pub cards: Vec<Card>,
    pub stats: SetStats,
    pub last_modified: DateTime<Utc>,
}

impl CardSet {
    /// Creates a set from freshly generated cards, computing its stats.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: Vec<Card>, now: DateTime<Utc>) -> Self {
        let stats = SetStats::for_cards(&cards);
        Self {
            id: SetId::generate(now),
            name: name.into(),
            date: now,
            cards,
            stats,
            last_modified: now,
        }
    }

    /// Recomputes stats and bumps the modification timestamp after the
    /// cards have been mutated in place.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.stats = SetStats::for_cards(&self.cards);
        self.last_modified = now;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardId, CardSource};
    use crate::time::fixed_now;

    fn cards() -> Vec<Card> {
        (0..4)
            .map(|i| {
                Card::new(
                    CardId::new(i),
                    format!("q{i}"),
                    format!("a{i}"),
                    CardSource::Chunk,
                )
            })
            .collect()
    }

    #[test]
    fn new_set_computes_stats() {
        let mut cards = cards();
        cards[0].set_mastered(true);
        cards[1].set_review_later(true);

        let set = CardSet::new("biology", cards, fixed_now());
        assert_eq!(set.stats.total, 4);
        assert_eq!(set.stats.mastered, 1);
        assert_eq!(set.stats.review, 1);
        assert_eq!(set.date, set.last_modified);
    }

    #[test]
    fn touch_refreshes_stats_and_timestamp() {
        let mut set = CardSet::new("biology", cards(), fixed_now());
        set.cards[2].set_mastered(true);

        let later = fixed_now() + chrono::Duration::hours(1);
        set.touch(later);

        assert_eq!(set.stats.mastered, 1);
        assert_eq!(set.last_modified, later);
        assert_eq!(set.date, fixed_now());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let set = CardSet::new("biology", cards(), fixed_now());
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.get("lastModified").is_some());
        assert_eq!(json["stats"]["total"], 4);
    }
}
