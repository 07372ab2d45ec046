//! Core domain types for the flashcard engine: the card model, review
//! state, and the spaced-repetition scheduler. Everything here is pure
//! data and pure functions; persistence and presentation live elsewhere.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scheduler;
pub mod time;

pub use error::Error;
pub use model::{
    Card, CardId, CardSet, CardSource, ReviewEntry, ReviewError, ReviewQuality, ReviewState, SetId,
    SetStats,
};
pub use scheduler::{DEFAULT_EASE_FACTOR, Difficulty, MIN_EASE_FACTOR, Scheduler, Statistics};
pub use time::Clock;
