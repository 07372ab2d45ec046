use cramdeck_core::CardSource;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::strategy::{
    Candidate, GenerationStrategy, QuestionStyle, StrategyContext, is_blocked_term,
};

/// `<Capitalized term> is/are/means/refers to <definition clause>` plus a
/// colon-delimited variant. Applied globally over the whole text, not per
/// sentence; the clause is bounded by sentence-ending punctuation.
static DEFINITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"([A-Z][A-Za-z\s]{2,40}?)\s+(?:is|are|means|refers to)\s+([^.!?]{15,250})")
            .expect("valid definition regex"),
        Regex::new(r"([A-Z][A-Za-z\s]{2,40}?):\s*([^.!?]{15,250})")
            .expect("valid colon definition regex"),
    ]
});

/// Term → definition extraction, the "What is X?" style.
pub struct DefinitionStrategy;

impl GenerationStrategy for DefinitionStrategy {
    fn name(&self) -> &'static str {
        "definition"
    }

    fn generate(&self, ctx: &StrategyContext<'_>, out: &mut Vec<Candidate>) {
        for pattern in DEFINITION_PATTERNS.iter() {
            for caps in pattern.captures_iter(ctx.text) {
                let term = caps[1].trim();
                let definition = caps[2].trim();
                if is_blocked_term(term) {
                    continue;
                }

                let question = match ctx.style {
                    QuestionStyle::Prompted => {
                        format!("What is the definition of \"{term}\"?")
                    }
                    QuestionStyle::Plain => term.to_string(),
                };
                out.push(Candidate {
                    question,
                    answer: definition.to_string(),
                    source: CardSource::Definition,
                });
            }
        }
    }
}
