//! Scheduling of note sequences into timed triggers.
//!
//! The engine itself owns no clock. [`schedule`] is a pure function
//! from a note list to trigger offsets, and [`Sequencer`] is the
//! cancellable queue the event loop polls with its own notion of
//! elapsed time. At most one playback is active: starting a new one
//! first cancels every pending trigger of the previous run.

use std::collections::VecDeque;
use std::time::Duration;

use crate::primitives::ComposedNote;

/// Fixed tempo: one beat (quarter note) per half second.
pub const BEAT_DURATION: Duration = Duration::from_millis(500);

/// Gap after the last trigger before playback counts as finished.
pub const RELEASE_TAIL: Duration = Duration::from_millis(300);

/// One pending trigger of a playback run.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ScheduledNote {
    /// Position within the played sequence, for highlighting.
    pub index: usize,
    pub note: ComposedNote,
    /// Offset from playback start.
    pub offset: Duration,
}

/// Lay a note sequence out on the time axis.
///
/// Offsets form a strictly increasing running sum of
/// `beats × BEAT_DURATION`; the first note fires at zero.
pub fn schedule(notes: &[ComposedNote]) -> Vec<ScheduledNote> {
    let mut offset = Duration::ZERO;
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let scheduled = ScheduledNote {
                index,
                note: *note,
                offset,
            };
            offset += BEAT_DURATION.mul_f64(note.def.beats);
            scheduled
        })
        .collect()
}

/// Cancellable queue of scheduled triggers.
#[derive(Debug, Default)]
pub struct Sequencer {
    pending: VecDeque<ScheduledNote>,
    current: Option<usize>,
    ends_at: Option<Duration>,
}
impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sequence for playback, cancelling any previous run
    /// first. An empty sequence leaves the sequencer idle.
    pub fn start(&mut self, notes: &[ComposedNote]) {
        self.stop();
        if notes.is_empty() {
            return;
        }
        let scheduled = schedule(notes);
        if let Some(last) = scheduled.last() {
            self.ends_at = Some(
                last.offset
                    + BEAT_DURATION.mul_f64(last.note.def.beats)
                    + RELEASE_TAIL,
            );
        }
        self.pending = scheduled.into();
    }

    /// Hand out every trigger due at `elapsed` (time since start),
    /// in order, and keep the currently-sounding index up to date.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledNote> {
        let mut due = Vec::new();
        while self
            .pending
            .front()
            .map_or(false, |next| next.offset <= elapsed)
        {
            if let Some(next) = self.pending.pop_front() {
                self.current = Some(next.index);
                due.push(next);
            }
        }
        if let Some(ends_at) = self.ends_at {
            if self.pending.is_empty() && elapsed >= ends_at {
                self.current = None;
                self.ends_at = None;
            }
        }
        due
    }

    /// Immediate and total cancellation: clears every pending
    /// trigger and the currently-sounding note.
    pub fn stop(&mut self) {
        self.pending.clear();
        self.current = None;
        self.ends_at = None;
    }

    pub fn is_playing(&self) -> bool {
        self.ends_at.is_some()
    }

    /// Index of the note sounding right now, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::catalog::{find_note, Division};
    use crate::primitives::ComposedNote;

    use super::{schedule, Sequencer, BEAT_DURATION};

    fn notes(ids: &[&str]) -> Vec<ComposedNote> {
        ids.iter()
            .map(|id| {
                ComposedNote::new(
                    find_note(Division::Sixteen, id)
                        .expect("unknown test note"),
                )
            })
            .collect()
    }

    #[test]
    fn offsets_run_sum_of_beats() {
        let scheduled =
            schedule(&notes(&["quarter", "half", "eighth", "quarter"]));
        let offsets: Vec<_> =
            scheduled.iter().map(|s| s.offset).collect();
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                BEAT_DURATION,
                BEAT_DURATION * 3,
                BEAT_DURATION.mul_f64(3.5),
            ]
        );
        // strictly increasing
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn advance_hands_out_due_triggers_in_order() {
        let mut sequencer = Sequencer::new();
        sequencer.start(&notes(&["quarter", "quarter", "half"]));
        assert!(sequencer.is_playing());

        let due = sequencer.advance(Duration::ZERO);
        assert_eq!(due.len(), 1);
        assert_eq!(sequencer.current_index(), Some(0));

        let due = sequencer.advance(Duration::from_millis(1100));
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].index, 1);
        assert_eq!(due[1].index, 2);
        assert_eq!(sequencer.current_index(), Some(2));
        assert!(sequencer.is_playing());

        // half note ends at 2000 ms, plus the release tail
        assert!(sequencer.advance(Duration::from_millis(2300)).is_empty());
        assert!(!sequencer.is_playing());
        assert_eq!(sequencer.current_index(), None);
    }

    #[test]
    fn stop_cancels_everything_pending() {
        let mut sequencer = Sequencer::new();
        sequencer.start(&notes(&["whole", "whole"]));
        sequencer.advance(Duration::ZERO);
        assert_eq!(sequencer.pending_count(), 1);

        sequencer.stop();
        assert_eq!(sequencer.pending_count(), 0);
        assert_eq!(sequencer.current_index(), None);
        assert!(!sequencer.is_playing());
        assert!(sequencer
            .advance(Duration::from_secs(60))
            .is_empty());
    }

    #[test]
    fn restart_replaces_the_previous_run() {
        let mut sequencer = Sequencer::new();
        sequencer.start(&notes(&["whole", "whole"]));
        sequencer.start(&notes(&["quarter"]));
        let due = sequencer.advance(Duration::ZERO);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].note.def.id, "quarter");
        assert_eq!(sequencer.pending_count(), 0);
    }

    #[test]
    fn empty_sequence_stays_idle() {
        let mut sequencer = Sequencer::new();
        sequencer.start(&[]);
        assert!(!sequencer.is_playing());
    }
}
