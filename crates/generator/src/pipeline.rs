use chrono::{DateTime, Utc};
use cramdeck_core::{Card, CardId, Clock};
use log::debug;
use rand::Rng;

use crate::dedup::{self, CardLimit, Deduplicator};
use crate::strategy::{
    ChunkStrategy, ClozeStrategy, DefinitionStrategy, GenerationStrategy, QuestionStyle,
    ReverseStrategy, StrategyContext,
};
use crate::{keywords, sentences, text};

/// How many ranked keywords the cloze strategy scans per sentence.
const CLOZE_KEYWORD_LIMIT: usize = 20;

/// Tunables for one generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub limit: CardLimit,
    pub style: QuestionStyle,
}

/// Generates flashcards from raw text using the ambient clock and rng.
///
/// Degenerate input degrades to an empty vector, never an error; deciding
/// whether an empty result is a failure belongs to the caller.
#[must_use]
pub fn generate(raw: &str, options: &GenerateOptions) -> Vec<Card> {
    generate_with(raw, options, Clock::Default, &mut rand::rng())
}

/// Same as [`generate`] but with an injected clock and random source, so
/// id assignment and the dedup shuffle are reproducible in tests.
#[must_use]
pub fn generate_with<R: Rng + ?Sized>(
    raw: &str,
    options: &GenerateOptions,
    clock: Clock,
    rng: &mut R,
) -> Vec<Card> {
    let normalized = text::normalize(raw);
    if normalized.is_empty() {
        return Vec::new();
    }

    let sentences = sentences::split(&normalized);
    let keywords = keywords::extract(&normalized, 1, CLOZE_KEYWORD_LIMIT);
    debug!(
        "normalized input into {} sentences and {} keywords",
        sentences.len(),
        keywords.len()
    );

    let ctx = StrategyContext {
        text: &normalized,
        sentences: &sentences,
        keywords: &keywords,
        style: options.style,
    };

    let now = clock.now();
    let mut gate = Deduplicator::new();
    let mut cards: Vec<Card> = Vec::new();

    let primary: [&dyn GenerationStrategy; 3] =
        [&DefinitionStrategy, &ReverseStrategy, &ClozeStrategy];
    for strategy in primary {
        admit_from(strategy, &ctx, &mut gate, &mut cards, now, rng);
    }

    // chunking is a fallback, not a peer: it only runs while a finite
    // requested limit is still unmet
    if let CardLimit::Max(limit) = options.limit {
        if cards.len() < limit {
            admit_from(&ChunkStrategy, &ctx, &mut gate, &mut cards, now, rng);
        }
    }

    dedup::finalize(cards, options.limit, rng)
}

fn admit_from<R: Rng + ?Sized>(
    strategy: &dyn GenerationStrategy,
    ctx: &StrategyContext<'_>,
    gate: &mut Deduplicator,
    cards: &mut Vec<Card>,
    now: DateTime<Utc>,
    rng: &mut R,
) {
    let mut candidates = Vec::new();
    strategy.generate(ctx, &mut candidates);

    let before = cards.len();
    for candidate in candidates {
        if gate.admit(&candidate.question, &candidate.answer) {
            cards.push(Card::new(
                CardId::generate(now, rng),
                candidate.question,
                candidate.answer,
                candidate.source,
            ));
        }
    }
    debug!(
        "strategy {} admitted {} cards",
        strategy.name(),
        cards.len() - before
    );
}
