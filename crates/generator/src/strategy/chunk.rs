use cramdeck_core::CardSource;

use crate::strategy::{Candidate, GenerationStrategy, QuestionStyle, StrategyContext};

/// Pairs whose combined text is shorter than this carry too little to
/// study.
const MIN_COMBINED_CHARS: usize = 30;

/// Length of the first-sentence prefix used as the question.
const QUESTION_PREFIX_CHARS: usize = 50;

/// Fallback strategy: pairs consecutive sentences (stride 2) into
/// explain-this-section cards. Only invoked by the pipeline when the
/// pattern-based strategies left the requested limit unmet.
pub struct ChunkStrategy;

impl GenerationStrategy for ChunkStrategy {
    fn name(&self) -> &'static str {
        "chunk"
    }

    fn generate(&self, ctx: &StrategyContext<'_>, out: &mut Vec<Candidate>) {
        for pair in ctx.sentences.chunks(2) {
            let [first, second] = pair else {
                // trailing odd sentence has no partner
                continue;
            };

            let answer = format!("{first} {second}");
            if answer.chars().count() < MIN_COMBINED_CHARS {
                continue;
            }

            let lead = prefix(first, QUESTION_PREFIX_CHARS);
            let question = match ctx.style {
                QuestionStyle::Prompted => {
                    format!("Explain the concepts discussed in this section:\n\"{lead}...\"")
                }
                QuestionStyle::Plain => format!("{lead}..."),
            };
            out.push(Candidate {
                question,
                answer,
                source: CardSource::Chunk,
            });
        }
    }
}

/// Char-safe prefix of at most `max_chars` characters.
fn prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}
