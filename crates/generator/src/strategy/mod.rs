use cramdeck_core::CardSource;

mod chunk;
mod cloze;
mod definition;
mod reverse;

pub use chunk::ChunkStrategy;
pub use cloze::ClozeStrategy;
pub use definition::DefinitionStrategy;
pub use reverse::ReverseStrategy;

/// A question/answer pair proposed by a strategy, before validation, id
/// assignment, and deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub question: String,
    pub answer: String,
    pub source: CardSource,
}

/// How strategies phrase the question side of the pair. The pair itself is
/// the contract; the prose around it is presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionStyle {
    /// Wrap the pair in a study prompt, e.g. `What is the definition of "X"?`.
    #[default]
    Prompted,
    /// Emit the bare pair with no wrapper text.
    Plain,
}

/// Input shared by every strategy: one normalized text together with its
/// derived sentence list and ranked keywords. Strategies never see raw
/// input and never mutate the context.
pub struct StrategyContext<'a> {
    pub text: &'a str,
    pub sentences: &'a [String],
    pub keywords: &'a [String],
    pub style: QuestionStyle,
}

/// One card synthesis heuristic. Implementations are pure over the
/// context, so new strategies slot into the pipeline without touching the
/// driver.
pub trait GenerationStrategy {
    fn name(&self) -> &'static str;

    /// Appends candidate cards derived from the context.
    fn generate(&self, ctx: &StrategyContext<'_>, out: &mut Vec<Candidate>);
}

/// Capitalized sentence openers that match the term patterns but are
/// pronouns or articles, never actual terms. Compared case-sensitively.
pub(crate) const TERM_BLOCKLIST: &[&str] = &["There", "It", "This", "That", "Here", "The"];

pub(crate) fn is_blocked_term(term: &str) -> bool {
    TERM_BLOCKLIST.contains(&term)
}

#[cfg(test)]
pub(crate) fn context<'a>(
    text: &'a str,
    sentences: &'a [String],
    keywords: &'a [String],
) -> StrategyContext<'a> {
    StrategyContext {
        text,
        sentences,
        keywords,
        style: QuestionStyle::Prompted,
    }
}
