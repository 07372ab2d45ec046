use chrono::Duration;

use crate::model::{Card, ReviewEntry, ReviewQuality, ReviewState};
use crate::time::Clock;

/// Lowest ease factor SM-2 allows; intervals never shrink faster than this.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Starting ease factor for cards that have never been graded.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Interval after the first successful review, in days.
const FIRST_INTERVAL: u32 = 1;

/// Interval after the second successful review, in days.
const SECOND_INTERVAL: u32 = 6;

//
// ─── SCHEDULER ─────────────────────────────────────────────────────────────────
//

/// SM-2 spaced-repetition scheduler.
///
/// Pure over its inputs apart from the injected clock: `review` returns an
/// updated copy of the card, it never mutates in place. A card that has
/// never been graded is treated as `repetitions = 0`, `ease = 2.5`,
/// `interval = 0` and is always due.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    clock: Clock,
}

/// Aggregate review counters over a card collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub due: usize,
    pub reviewed: usize,
    pub not_reviewed: usize,
    /// Mean ease factor over reviewed cards; 2.5 when none are reviewed.
    pub average_ease_factor: f64,
    /// Sum of repetition counts across all cards.
    pub total_repetitions: u64,
}

/// Coarse difficulty bucket derived from a card's ease factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl Scheduler {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Applies one grading event and returns the updated card.
    ///
    /// Failure (quality below 3) resets the repetition streak and schedules
    /// the card for tomorrow. Success walks the classic SM-2 ladder:
    /// 1 day, then 6 days, then `round(interval * ease)`. The ease factor
    /// update uses the standard formula
    /// `EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))`,
    /// floored at 1.3 regardless of how low the quality was.
    #[must_use]
    pub fn review(&self, card: &Card, quality: ReviewQuality) -> Card {
        let now = self.clock.now();
        let prev = card.review.as_ref();

        let repetitions = prev.map_or(0, |r| r.repetitions);
        let ease_factor = prev.map_or(DEFAULT_EASE_FACTOR, |r| r.ease_factor);
        let interval = prev.map_or(0, |r| r.interval);

        let (new_repetitions, new_interval) = if quality.is_passing() {
            let next = match repetitions {
                0 => FIRST_INTERVAL,
                1 => SECOND_INTERVAL,
                _ => (f64::from(interval) * ease_factor).round() as u32,
            };
            (repetitions + 1, next)
        } else {
            (0, FIRST_INTERVAL)
        };

        let q = f64::from(quality.as_u8());
        let new_ease_factor =
            (ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02))).max(MIN_EASE_FACTOR);

        let mut history = prev.map_or_else(Vec::new, |r| r.review_history.clone());
        history.push(ReviewEntry {
            date: now,
            quality: quality.as_u8(),
            interval: new_interval,
        });

        let mut updated = card.clone();
        updated.review = Some(ReviewState {
            repetitions: new_repetitions,
            ease_factor: new_ease_factor,
            interval: new_interval,
            last_reviewed: now,
            next_review_date: now + Duration::days(i64::from(new_interval)),
            review_history: history,
        });
        updated
    }

    /// True when the card should be studied now.
    ///
    /// Compares UTC calendar days rather than raw timestamps, so a card
    /// scheduled for 5pm today already counts as due at 9am.
    #[must_use]
    pub fn is_due(&self, card: &Card) -> bool {
        match card.review.as_ref() {
            None => true,
            Some(state) => {
                state.next_review_date.date_naive() <= self.clock.now().date_naive()
            }
        }
    }

    /// Filters a collection down to the cards currently due.
    #[must_use]
    pub fn due_cards<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        cards.iter().filter(|c| self.is_due(c)).collect()
    }

    /// Stable priority ordering for a study session.
    ///
    /// Due cards come before cards scheduled in the future; never-reviewed
    /// cards sort ahead of dated ones; otherwise earlier due dates first.
    #[must_use]
    pub fn sort_by_priority(&self, cards: &[Card]) -> Vec<Card> {
        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|card| {
            (
                !self.is_due(card),
                card.review.as_ref().map(|r| r.next_review_date),
            )
        });
        sorted
    }

    /// Aggregate counters over a card collection.
    #[must_use]
    pub fn statistics(&self, cards: &[Card]) -> Statistics {
        let reviewed: Vec<&Card> = cards.iter().filter(|c| c.is_reviewed()).collect();

        let average_ease_factor = if reviewed.is_empty() {
            DEFAULT_EASE_FACTOR
        } else {
            reviewed.iter().map(|c| c.ease_factor()).sum::<f64>() / reviewed.len() as f64
        };

        Statistics {
            total: cards.len(),
            due: cards.iter().filter(|c| self.is_due(c)).count(),
            reviewed: reviewed.len(),
            not_reviewed: cards.len() - reviewed.len(),
            average_ease_factor,
            total_repetitions: cards.iter().map(|c| u64::from(c.repetitions())).sum(),
        }
    }

    /// Difficulty bucket from the card's ease factor.
    #[must_use]
    pub fn difficulty(card: &Card) -> Difficulty {
        let ease = card.ease_factor();
        if ease >= 2.5 {
            Difficulty::Easy
        } else if ease >= 2.0 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Human-readable description of when the card comes up next.
    #[must_use]
    pub fn format_next_review(&self, card: &Card) -> String {
        let Some(state) = card.review.as_ref() else {
            return "not reviewed yet".to_string();
        };

        let days = (state.next_review_date.date_naive() - self.clock.now().date_naive())
            .num_days();
        match days {
            d if d < 0 => {
                let overdue = -d;
                if overdue == 1 {
                    "overdue by 1 day".to_string()
                } else {
                    format!("overdue by {overdue} days")
                }
            }
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            d => format!("due in {d} days"),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
