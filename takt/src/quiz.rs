//! Random measure-filling rhythms and answer checking.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{notes_for_division, Division};
use crate::primitives::{ComposedNote, MEASURE_EPSILON};

/// Outcome of the last answer check.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Default,
)]
pub enum QuizStatus {
    #[default]
    Idle,
    Correct,
    Wrong,
}

/// Build one random rhythm that fills a measure from the non-rest
/// notes of the division's tier.
///
/// Each step filters the tier to notes that still fit the remaining
/// space (within tolerance) and picks one uniformly. If nothing fits
/// the loop ends early and the quiz stays short of a full bar; that
/// is accepted, not an error. The smallest tier fraction is a fixed
/// positive constant, so the loop runs at most `division.parts()`
/// times.
///
/// Randomness is passed in so tests can seed it.
pub fn generate_quiz<R: Rng + ?Sized>(
    division: Division,
    rng: &mut R,
) -> Vec<ComposedNote> {
    let playable: Vec<_> = notes_for_division(division)
        .into_iter()
        .filter(|def| !def.is_rest())
        .collect();

    let mut quiz = Vec::new();
    let mut total_fraction = 0.0;
    while total_fraction < 1.0 {
        let remaining = 1.0 - total_fraction;
        let fitting: Vec<_> = playable
            .iter()
            .copied()
            .filter(|def| def.decimal() <= remaining + MEASURE_EPSILON)
            .collect();
        if fitting.is_empty() {
            break;
        }
        let def = fitting[rng.gen_range(0..fitting.len())];
        quiz.push(ComposedNote::new(def));
        total_fraction += def.decimal();
    }
    log::debug!(
        "generated quiz: {} notes, division {:?}",
        quiz.len(),
        division
    );
    quiz
}

/// Ordered identity comparison of an answer against the target.
///
/// Only note ids are compared, never fraction values: two eighths
/// and one quarter sum alike but are different answers. A length
/// mismatch is wrong regardless of content.
pub fn check_answer(
    answer: &[ComposedNote],
    target: &[ComposedNote],
) -> bool {
    answer.len() == target.len()
        && answer
            .iter()
            .zip(target.iter())
            .all(|(a, b)| a.def.id == b.def.id)
}
