//! The learner's working note sequence.

use crate::catalog::NoteDef;

use super::{
    fraction_tools::{sum_fractions, FractionTotal},
    measure::{split_into_measures, ComposedNote, Measure},
    MEASURE_EPSILON,
};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CompositionError {
    #[error("no measure at index {0}")]
    NoSuchMeasure(usize),
    #[error("measure {0} has no note at position {1}")]
    NoSuchNote(usize, usize),
}

/// Ordered, mutable sequence of composed notes.
///
/// Append-only except for removal addressed by (measure index,
/// position within measure). No invariant is kept on the total sum:
/// the final measure may stay partial indefinitely.
#[derive(Debug, Default, PartialEq)]
pub struct Composition {
    notes: Vec<ComposedNote>,
}
impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[ComposedNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a fresh instance of a catalog note. The instance is
    /// returned so the caller can trigger immediate audio feedback.
    pub fn push(&mut self, def: &'static NoteDef) -> ComposedNote {
        let note = ComposedNote::new(def);
        self.notes.push(note);
        note
    }

    /// Remove the note at `note_index` of measure `measure_index`.
    ///
    /// The two-level address is resolved against a fresh partition of
    /// the current sequence, then mapped to a flat index.
    pub fn remove(
        &mut self,
        measure_index: usize,
        note_index: usize,
    ) -> Result<ComposedNote, CompositionError> {
        let measures = self.measures();
        let measure = measures
            .get(measure_index)
            .ok_or(CompositionError::NoSuchMeasure(measure_index))?;
        if note_index >= measure.len() {
            return Err(CompositionError::NoSuchNote(
                measure_index,
                note_index,
            ));
        }
        let global_index: usize = measures[..measure_index]
            .iter()
            .map(Measure::len)
            .sum::<usize>()
            + note_index;
        Ok(self.notes.remove(global_index))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Current grouping into measures, recomputed on every call.
    pub fn measures(&self) -> Vec<Measure> {
        split_into_measures(&self.notes)
    }

    pub fn total(&self) -> FractionTotal {
        let pairs: Vec<(u64, u64)> = self
            .notes
            .iter()
            .map(|note| (note.def.numerator, note.def.denominator))
            .collect();
        sum_fractions(&pairs)
    }

    /// Fraction sum of the measure under construction, 0 when empty.
    pub fn current_measure_fraction(&self) -> f64 {
        match self.measures().last() {
            Some(measure) => measure.total().decimal,
            None => 0.0,
        }
    }

    /// Space left in the bar under construction. A just-completed
    /// bar means the next note opens a fresh one, so the answer is a
    /// full measure again.
    pub fn remaining_space(&self) -> f64 {
        let current = self.current_measure_fraction();
        if (current - 1.0).abs() < MEASURE_EPSILON {
            1.0
        } else {
            1.0 - current
        }
    }
}
