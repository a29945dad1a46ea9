//! Seam to the audio-synthesis collaborator.
//!
//! The engine never synthesizes sound. It fires note triggers into
//! a [`NotePlayer`] and forgets them; oscillators, envelopes and the
//! per-instrument waveforms live behind that trait.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize,
    Default,
)]
pub enum Instrument {
    #[default]
    Piano,
    Xylophone,
    Drum,
    Synth,
}

/// Oscillator pitch per note id, longer notes sitting lower on a
/// C4-scale run. The rest is silent; unknown ids fall back to A4.
pub fn note_frequency(id: &str) -> f64 {
    match id {
        "rest" => 0.0,
        "sixteenth" => 523.25,
        "eighth" => 493.88,
        "quarter" => 440.0,
        "half" => 392.0,
        "whole" => 349.23,
        _ => 440.0,
    }
}

/// Fire-and-forget note trigger. Beats are quarter-note units; the
/// implementation owns timing within the note's own envelope.
pub trait NotePlayer {
    fn play(&mut self, note_id: &str, beats: f64, instrument: Instrument);
}

/// Player that only logs triggers, for running without an audio
/// backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPlayer;
impl NotePlayer for LogPlayer {
    fn play(&mut self, note_id: &str, beats: f64, instrument: Instrument) {
        log::debug!(
            "play {} ({} Hz) for {} beats on {:?}",
            note_id,
            note_frequency(note_id),
            beats,
            instrument
        );
    }
}
