//! Greedy partitioning of a flat note sequence into measures.
//!
//! A measure is derived data, never stored: it is a maximal run of
//! notes whose fractions sum to 1 within the shared tolerance
//! [`MEASURE_EPSILON`](super::MEASURE_EPSILON), except possibly the
//! final run, which may be short. The partitioner is
//! pure and recomputes the grouping from scratch on every call.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::NoteDef;

use super::{
    fraction_tools::{sum_fractions, FractionTotal},
    Length, MEASURE_EPSILON,
};

static NEXT_UID: AtomicU64 = AtomicU64::new(1);

/// A catalog note placed into a sequence.
///
/// The `uid` distinguishes otherwise identical entries (two quarter
/// notes, say) for removal and playback highlighting. It carries no
/// meaning beyond identity.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ComposedNote {
    pub def: &'static NoteDef,
    pub uid: u64,
}
impl ComposedNote {
    pub fn new(def: &'static NoteDef) -> Self {
        Self {
            def,
            uid: NEXT_UID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// One bar of the derived grouping.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Measure {
    notes: Vec<ComposedNote>,
}
impl Measure {
    pub fn notes(&self) -> &[ComposedNote] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Reduced sum of the member fractions.
    pub fn total(&self) -> FractionTotal {
        let pairs: Vec<(u64, u64)> = self
            .notes
            .iter()
            .map(|note| (note.def.numerator, note.def.denominator))
            .collect();
        sum_fractions(&pairs)
    }

    /// Exact sum of the member fractions.
    pub fn length(&self) -> Length {
        self.notes
            .iter()
            .fold(Length::zero(), |acc, note| acc + note.def.length())
    }

    /// True when the bar is filled to capacity within tolerance.
    pub fn is_complete(&self) -> bool {
        (self.total().decimal - 1.0).abs() < MEASURE_EPSILON
    }

    fn push(&mut self, note: ComposedNote) {
        self.notes.push(note);
    }
}

/// Split an ordered note sequence into measures of capacity 1.
///
/// Single greedy pass. A note that would push the running sum past
/// `1 + ε` closes the current bar and opens a fresh one; this also
/// means a single note larger than a whole measure is accepted alone
/// into its own bar rather than rejected. Concatenating the result
/// in order reproduces the input exactly.
///
/// # Example
/// ```
/// use takt::catalog::{find_note, Division};
/// use takt::primitives::{split_into_measures, ComposedNote};
///
/// // whole note + quarter note: a full bar and a partial tail
/// let whole =
///     ComposedNote::new(find_note(Division::Four, "whole").unwrap());
/// let quarter =
///     ComposedNote::new(find_note(Division::Four, "quarter").unwrap());
/// let measures = split_into_measures(&[whole, quarter]);
/// assert_eq!(measures.len(), 2);
/// assert!(measures[0].is_complete());
/// assert_eq!(measures[1].total().decimal, 0.25);
/// ```
pub fn split_into_measures(notes: &[ComposedNote]) -> Vec<Measure> {
    let mut measures = Vec::new();
    let mut current = Measure::default();
    let mut running_sum = 0.0;

    for note in notes {
        let fraction = note.def.decimal();
        if running_sum + fraction > 1.0 + MEASURE_EPSILON {
            if !current.is_empty() {
                measures.push(std::mem::take(&mut current));
            }
            current.push(*note);
            running_sum = fraction;
        } else {
            current.push(*note);
            running_sum += fraction;
            if (running_sum - 1.0).abs() < MEASURE_EPSILON {
                measures.push(std::mem::take(&mut current));
                running_sum = 0.0;
            }
        }
    }
    if !current.is_empty() {
        measures.push(current);
    }
    measures
}

#[cfg(test)]
mod tests {
    use crate::catalog::{find_note, Division};
    use crate::primitives::Length;

    use super::{split_into_measures, ComposedNote};

    fn note(id: &str) -> ComposedNote {
        ComposedNote::new(
            find_note(Division::Sixteen, id).expect("unknown test note"),
        )
    }

    #[test]
    fn uids_are_unique() {
        let a = note("quarter");
        let b = note("quarter");
        assert_eq!(a.def, b.def);
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn empty_input_yields_no_measures() {
        assert!(split_into_measures(&[]).is_empty());
    }

    #[test]
    fn exact_fill_closes_the_bar() {
        let notes = vec![
            note("quarter"),
            note("quarter"),
            note("half"),
            note("whole"),
        ];
        let measures = split_into_measures(&notes);
        assert_eq!(measures.len(), 2);
        for measure in &measures {
            assert!(measure.is_complete());
            assert_eq!(measure.length(), Length::measure());
        }
    }

    #[test]
    fn partial_tail_stays_open() {
        let notes = vec![note("whole"), note("quarter")];
        let measures = split_into_measures(&notes);
        assert_eq!(measures.len(), 2);
        assert!(measures[0].is_complete());
        assert!(!measures[1].is_complete());
        assert_eq!(measures[1].total().decimal, 0.25);
    }

    #[test]
    fn sixteen_sixteenths_make_one_bar() {
        let notes: Vec<_> =
            (0..16).map(|_| note("sixteenth")).collect();
        let measures = split_into_measures(&notes);
        assert_eq!(measures.len(), 1);
        assert!(measures[0].is_complete());
        assert_eq!(measures[0].total().to_string(), "1/1");
    }
}
