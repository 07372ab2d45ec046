#![forbid(unsafe_code)]

//! Heuristic flashcard generation over plain English text.
//!
//! The pipeline is plain function composition: normalize the raw text,
//! segment it into sentences, rank keywords, run four independent
//! synthesis strategies through a shared validation/uniqueness gate, then
//! shuffle and cut to the requested limit. Every randomized step takes an
//! explicit `Rng` so tests can seed it.

pub mod dedup;
pub mod distractors;
pub mod keywords;
pub mod pipeline;
pub mod sentences;
pub mod strategy;
pub mod text;

pub use dedup::{CardLimit, Deduplicator};
pub use pipeline::{GenerateOptions, generate, generate_with};
pub use strategy::{Candidate, GenerationStrategy, QuestionStyle, StrategyContext};
