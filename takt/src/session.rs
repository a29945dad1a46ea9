//! Top-level controller: mode, division, instrument, the working
//! composition and the quiz life cycle.
//!
//! Single-threaded by design. The session owns the only two pieces
//! of mutable shared state (the composition and the quiz target) and
//! replaces them wholesale on state-changing actions; the engine
//! underneath stays pure.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::audio::{Instrument, NotePlayer};
use crate::catalog::{notes_for_division, Division, NoteDef};
use crate::playback::{ScheduledNote, Sequencer};
use crate::primitives::{
    Composition, CompositionError, ComposedNote, Measure,
};
use crate::quiz::{check_answer, generate_quiz, QuizStatus};

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Default,
)]
pub enum GameMode {
    #[default]
    Create,
    Quiz,
}

/// Hints reveal the quiz target's opening notes, two at most.
pub const MAX_HINTS: usize = 2;

#[derive(Debug)]
pub struct Session {
    mode: GameMode,
    division: Division,
    instrument: Instrument,
    composition: Composition,
    quiz_target: Vec<ComposedNote>,
    quiz_status: QuizStatus,
    hint_count: usize,
    answer_revealed: bool,
    sequencer: Sequencer,
    rng: StdRng,
}
impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded construction, for deterministic quizzes in tests.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            mode: GameMode::default(),
            division: Division::Four,
            instrument: Instrument::default(),
            composition: Composition::new(),
            quiz_target: Vec::new(),
            quiz_status: QuizStatus::Idle,
            hint_count: 0,
            answer_revealed: false,
            sequencer: Sequencer::new(),
            rng,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn division(&self) -> Division {
        self.division
    }
    pub fn instrument(&self) -> Instrument {
        self.instrument
    }
    pub fn composition(&self) -> &Composition {
        &self.composition
    }
    pub fn quiz_target(&self) -> &[ComposedNote] {
        &self.quiz_target
    }
    pub fn quiz_status(&self) -> QuizStatus {
        self.quiz_status
    }
    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }
    pub fn is_playing(&self) -> bool {
        self.sequencer.is_playing()
    }
    pub fn current_note_index(&self) -> Option<usize> {
        self.sequencer.current_index()
    }

    /// Note blocks selectable at the active division.
    pub fn available_notes(&self) -> Vec<&'static NoteDef> {
        notes_for_division(self.division)
    }

    /// Current grouping of the composition into measures.
    pub fn measures(&self) -> Vec<Measure> {
        self.composition.measures()
    }

    pub fn remaining_space(&self) -> f64 {
        self.composition.remaining_space()
    }

    /// Append a note and give immediate audio feedback.
    pub fn add_note<P: NotePlayer>(
        &mut self,
        def: &'static NoteDef,
        player: &mut P,
    ) -> ComposedNote {
        let note = self.composition.push(def);
        player.play(def.id, def.beats, self.instrument);
        note
    }

    pub fn remove_note(
        &mut self,
        measure_index: usize,
        note_index: usize,
    ) -> Result<ComposedNote, CompositionError> {
        self.composition.remove(measure_index, note_index)
    }

    /// Wipe the composition, stop playback, reset the quiz verdict.
    pub fn clear(&mut self) {
        self.composition.clear();
        self.quiz_status = QuizStatus::Idle;
        self.sequencer.stop();
    }

    pub fn set_instrument(&mut self, instrument: Instrument) {
        self.instrument = instrument;
    }

    /// Switch between free composition and quiz mode. Entering quiz
    /// mode immediately poses (and auto-plays) a fresh target.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.sequencer.stop();
        self.mode = mode;
        self.composition.clear();
        self.reset_quiz_state();
        log::debug!("mode changed to {:?}", mode);
        if mode == GameMode::Quiz {
            self.next_quiz();
        }
    }

    /// Change the visible catalog tier. The composition is wiped:
    /// its notes may no longer be selectable at the new division.
    pub fn set_division(&mut self, division: Division) {
        self.sequencer.stop();
        self.division = division;
        self.composition.clear();
        self.reset_quiz_state();
        log::debug!("division changed to {:?}", division);
        if self.mode == GameMode::Quiz {
            self.next_quiz();
        }
    }

    /// Generate and auto-play a fresh quiz target, wiping the
    /// learner's previous attempt and hint state.
    pub fn next_quiz(&mut self) {
        self.quiz_target = generate_quiz(self.division, &mut self.rng);
        self.composition.clear();
        self.reset_quiz_state();
        self.sequencer.start(&self.quiz_target);
    }

    fn reset_quiz_state(&mut self) {
        self.quiz_status = QuizStatus::Idle;
        self.hint_count = 0;
        self.answer_revealed = false;
    }

    /// Spend one hint. Capped at [`MAX_HINTS`] and at the target
    /// length. Returns the hints used so far.
    pub fn use_hint(&mut self) -> usize {
        if self.hint_count < MAX_HINTS
            && self.hint_count < self.quiz_target.len()
        {
            self.hint_count += 1;
        }
        self.hint_count
    }

    /// Opening notes of the target revealed by hints.
    pub fn hint_notes(&self) -> &[ComposedNote] {
        &self.quiz_target[..self.hint_count]
    }

    pub fn reveal_answer(&mut self) {
        self.answer_revealed = true;
    }

    /// Judge the composition against the quiz target: ordered id
    /// equality, length checked first.
    pub fn check_answer(&mut self) -> QuizStatus {
        self.quiz_status =
            match check_answer(self.composition.notes(), &self.quiz_target)
            {
                true => QuizStatus::Correct,
                false => QuizStatus::Wrong,
            };
        log::debug!("answer checked: {:?}", self.quiz_status);
        self.quiz_status
    }

    /// Play back the learner's composition.
    pub fn play_composition(&mut self) {
        self.sequencer.start(self.composition.notes());
    }

    /// Replay the quiz target ("listen again").
    pub fn play_target(&mut self) {
        self.sequencer.start(&self.quiz_target);
    }

    pub fn stop(&mut self) {
        self.sequencer.stop();
    }

    /// Poll pending playback with the caller's clock, firing every
    /// due note into the player.
    pub fn pump<P: NotePlayer>(
        &mut self,
        elapsed: Duration,
        player: &mut P,
    ) -> Vec<ScheduledNote> {
        let due = self.sequencer.advance(elapsed);
        for scheduled in &due {
            player.play(
                scheduled.note.def.id,
                scheduled.note.def.beats,
                self.instrument,
            );
        }
        due
    }
}
