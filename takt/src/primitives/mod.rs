//! Exact-fraction building blocks of the rhythm engine.
//!
//! Everything measure-related is derived data: the composition is a
//! flat list of notes, and measures are recomputed from it on every
//! query. The same capacity and tolerance rules are shared by the
//! partitioner and the quiz generator, so they can not drift apart.

pub mod composition;
pub mod fraction_tools;
pub mod length;
pub mod measure;

pub use composition::{Composition, CompositionError};
pub use fraction_tools::{gcd, lcm, reduce, sum_fractions, FractionTotal};
pub use length::Length;
pub use measure::{split_into_measures, ComposedNote, Measure};

/// Tolerance for every "sums up to one measure" comparison.
///
/// Running sums are accumulated as decimals, so boundary checks must
/// absorb floating-point drift. A single shared constant keeps the
/// partitioner and the generator on the same rules.
pub const MEASURE_EPSILON: f64 = 1e-4;
