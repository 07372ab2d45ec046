use cramdeck_core::CardSource;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::strategy::{
    Candidate, GenerationStrategy, QuestionStyle, StrategyContext, is_blocked_term,
};

/// Same family as the definition pattern but restricted to is/are/means,
/// the subset where the inverse pairing still reads naturally.
static REVERSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s]{2,40}?)\s+(?:is|are|means)\s+([^.!?]{15,250})")
        .expect("valid reverse regex")
});

/// Definitions shorter than this read as fragments when used as a question.
const MIN_DEFINITION_CHARS: usize = 20;
/// Definitions this long overwhelm the question side; leave those to the
/// forward strategy.
const MAX_DEFINITION_CHARS: usize = 100;

/// Definition → term concept checks, the inverse of [`DefinitionStrategy`].
///
/// Intentionally allowed to re-match text the definition strategy already
/// consumed: the question roles are swapped, so the two never collide in
/// the question-keyed deduplicator.
///
/// [`DefinitionStrategy`]: crate::strategy::DefinitionStrategy
pub struct ReverseStrategy;

impl GenerationStrategy for ReverseStrategy {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn generate(&self, ctx: &StrategyContext<'_>, out: &mut Vec<Candidate>) {
        for caps in REVERSE_PATTERN.captures_iter(ctx.text) {
            let term = caps[1].trim();
            let definition = caps[2].trim();
            if is_blocked_term(term) {
                continue;
            }

            let definition_len = definition.chars().count();
            if definition_len <= MIN_DEFINITION_CHARS || definition_len >= MAX_DEFINITION_CHARS {
                continue;
            }

            let question = match ctx.style {
                QuestionStyle::Prompted => {
                    format!("Which term describes this concept?\n\"{definition}\"")
                }
                QuestionStyle::Plain => definition.to_string(),
            };
            out.push(Candidate {
                question,
                answer: term.to_string(),
                source: CardSource::Reverse,
            });
        }
    }
}
