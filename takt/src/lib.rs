//! Measure-partitioning and fraction-arithmetic engine of a rhythm
//! composition trainer.
//!
//! A learner fills 4/4 measures with note blocks, each worth an
//! exact fraction of a bar, and in quiz mode reproduces a randomly
//! generated rhythm by ear. The modules here hold everything with
//! actual invariants: exact rational arithmetic, greedy measure
//! partitioning, quiz generation and the session state machine.
//! Rendering and sound synthesis stay behind the seams in
//! [`audio`] and [`playback`].

pub mod audio;
pub mod catalog;
pub mod playback;
pub mod primitives;
pub mod quiz;
pub mod session;
