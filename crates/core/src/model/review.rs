use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when interpreting review input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("review quality must be in the range 0-5, got {0}")]
    InvalidQuality(u8),
}

//
// ─── REVIEW QUALITY ───────────────────────────────────────────────────────────
//

/// Self-assessed recall quality on the SM-2 0-5 scale.
///
/// Anything below `Difficult` counts as a failed recall and resets the
/// card's repetition streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReviewQuality {
    /// Complete blackout, no recall at all.
    Blackout,
    /// Incorrect, but the answer was remembered once seen.
    Incorrect,
    /// Incorrect, but the answer seemed easy to recall.
    IncorrectEasy,
    /// Correct with serious difficulty.
    Difficult,
    /// Correct after hesitation.
    Hesitant,
    /// Perfect recall with no hesitation.
    Perfect,
}

impl ReviewQuality {
    /// Converts a numeric rating (0-5) to a `ReviewQuality`.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::InvalidQuality` if the value is above 5.
    pub fn from_u8(value: u8) -> Result<Self, ReviewError> {
        match value {
            0 => Ok(Self::Blackout),
            1 => Ok(Self::Incorrect),
            2 => Ok(Self::IncorrectEasy),
            3 => Ok(Self::Difficult),
            4 => Ok(Self::Hesitant),
            5 => Ok(Self::Perfect),
            _ => Err(ReviewError::InvalidQuality(value)),
        }
    }

    /// Numeric value on the SM-2 scale.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Blackout => 0,
            Self::Incorrect => 1,
            Self::IncorrectEasy => 2,
            Self::Difficult => 3,
            Self::Hesitant => 4,
            Self::Perfect => 5,
        }
    }

    /// True for qualities SM-2 treats as a successful recall (>= 3).
    #[must_use]
    pub fn is_passing(self) -> bool {
        self.as_u8() >= 3
    }
}

//
// ─── REVIEW STATE ─────────────────────────────────────────────────────────────
//

/// Scheduling state a card acquires on its first graded review.
///
/// Serialized flattened into the card object, field names matching the
/// shape the browser client persisted (`easeFactor`, `nextReviewDate`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Consecutive successful reviews since the last failure.
    pub repetitions: u32,
    /// SM-2 ease factor, never below 1.3.
    pub ease_factor: f64,
    /// Current review interval in whole days.
    pub interval: u32,
    pub last_reviewed: DateTime<Utc>,
    pub next_review_date: DateTime<Utc>,
    /// Append-only record of every grading event.
    #[serde(default)]
    pub review_history: Vec<ReviewEntry>,
}

/// One entry of a card's review history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub date: DateTime<Utc>,
    pub quality: u8,
    pub interval: u32,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_quality_conversion_works() {
        assert_eq!(ReviewQuality::from_u8(0).unwrap(), ReviewQuality::Blackout);
        assert_eq!(ReviewQuality::from_u8(5).unwrap(), ReviewQuality::Perfect);
        let err = ReviewQuality::from_u8(6).unwrap_err();
        assert!(matches!(err, ReviewError::InvalidQuality(6)));
    }

    #[test]
    fn round_trips_through_u8() {
        for raw in 0..=5 {
            assert_eq!(ReviewQuality::from_u8(raw).unwrap().as_u8(), raw);
        }
    }

    #[test]
    fn passing_threshold_is_three() {
        assert!(!ReviewQuality::Blackout.is_passing());
        assert!(!ReviewQuality::IncorrectEasy.is_passing());
        assert!(ReviewQuality::Difficult.is_passing());
        assert!(ReviewQuality::Perfect.is_passing());
    }
}
