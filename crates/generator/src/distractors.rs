use cramdeck_core::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// Answers under this length are treated as short "term" answers.
const SHORT_ANSWER_CHARS: usize = 50;

/// Upper bound for distractors offered against a short answer.
const SHORT_POOL_MAX_CHARS: usize = 60;

/// Lower bound for distractors offered against a long answer.
const LONG_POOL_MIN_CHARS: usize = 40;

/// Picks up to `count` incorrect options for a multiple-choice round.
///
/// Distractors are drawn from other cards' answers and length-matched to
/// the correct answer, so a one-word term never appears next to three
/// paragraph-length definitions. When the length filter starves the pool,
/// it falls back to every other card. The result is a shuffled, distinct
/// sample that never equals the correct answer (case-insensitively).
#[must_use]
pub fn pick<R: Rng + ?Sized>(card: &Card, all: &[Card], count: usize, rng: &mut R) -> Vec<String> {
    let is_short = card.answer.chars().count() < SHORT_ANSWER_CHARS;

    let mut pool: Vec<&Card> = all
        .iter()
        .filter(|other| {
            if other.id == card.id {
                return false;
            }
            let length = other.answer.chars().count();
            if is_short {
                length < SHORT_POOL_MAX_CHARS
            } else {
                length >= LONG_POOL_MIN_CHARS
            }
        })
        .collect();

    if pool.len() < count {
        pool = all.iter().filter(|other| other.id != card.id).collect();
    }

    pool.shuffle(rng);

    let correct = card.answer.trim().to_lowercase();
    let mut picked: Vec<String> = Vec::with_capacity(count);
    for candidate in pool {
        if picked.len() >= count {
            break;
        }
        if candidate.answer.trim().to_lowercase() == correct {
            continue;
        }
        if picked.contains(&candidate.answer) {
            continue;
        }
        picked.push(candidate.answer.clone());
    }
    picked
}
