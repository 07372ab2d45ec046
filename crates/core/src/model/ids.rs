use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Random bits mixed into the low end of a generated `CardId`.
const CARD_ID_RANDOM_BITS: u32 = 20;

/// Unique identifier for a Card.
///
/// The upper bits carry the unix-millisecond creation time, the low 20 bits
/// are random, so ids generated within the same millisecond still collide
/// only with negligible probability inside one generation batch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u64);

impl CardId {
    /// Creates a `CardId` from a raw value.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Generates a fresh id from a timestamp and a random source.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let millis = now.timestamp_millis().max(0) as u64;
        let noise = u64::from(rng.random_range(0u32..(1 << CARD_ID_RANDOM_BITS)));
        Self((millis << CARD_ID_RANDOM_BITS) | noise)
    }

    /// Returns the underlying u64 value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Unique identifier for a saved card set.
///
/// Kept as an opaque string because the persistence boundary stores set ids
/// as stringified creation timestamps.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetId(String);

impl SetId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derives a set id from its creation time.
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self(now.timestamp_millis().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.0)
    }
}

impl fmt::Debug for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetId({})", self.0)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an id from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for CardId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(CardId::new).map_err(|_| ParseIdError {
            kind: "CardId".to_string(),
        })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn card_id_display_round_trips() {
        let id = CardId::new(42);
        assert_eq!(id.to_string(), "42");
        let parsed: CardId = "42".parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn card_id_from_str_invalid() {
        assert!("not-a-number".parse::<CardId>().is_err());
    }

    #[test]
    fn generated_ids_are_unique_within_a_batch() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = fixed_now();
        let ids: std::collections::HashSet<CardId> =
            (0..500).map(|_| CardId::generate(now, &mut rng)).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn generated_id_embeds_timestamp() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = fixed_now();
        let id = CardId::generate(now, &mut rng);
        assert_eq!(
            (id.value() >> 20) as i64,
            now.timestamp_millis()
        );
    }

    #[test]
    fn set_id_from_timestamp() {
        let id = SetId::generate(fixed_now());
        assert_eq!(id.as_str(), fixed_now().timestamp_millis().to_string());
    }
}
