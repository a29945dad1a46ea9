//! Static note catalog, tiered by division.
//!
//! The catalog never changes at runtime: every tier is a `const`
//! table, and [`notes_for_division`] assembles the visible set for
//! the active division. Finer divisions extend coarser ones, they
//! never replace them.

use fraction::Fraction;
use serde::{Deserialize, Serialize};

use crate::primitives::Length;

/// The finest subdivision visible to the learner.
///
/// Selects a catalog tier, it does not scale any fraction values.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize,
    Deserialize,
)]
pub enum Division {
    Four,
    Eight,
    Sixteen,
}
impl Division {
    pub const ALL: [Division; 3] =
        [Division::Four, Division::Eight, Division::Sixteen];

    /// Number of smallest steps in one measure: 4, 8 or 16.
    pub fn parts(&self) -> u64 {
        match self {
            Division::Four => 4,
            Division::Eight => 8,
            Division::Sixteen => 16,
        }
    }

    pub fn from_parts(parts: u64) -> Option<Self> {
        match parts {
            4 => Some(Division::Four),
            8 => Some(Division::Eight),
            16 => Some(Division::Sixteen),
            _ => None,
        }
    }
}

/// Immutable catalog entry: one selectable note block.
///
/// The fraction is stored redundantly: exact as
/// `numerator/denominator`, and as the decimal the running-sum
/// checks use. For every entry `decimal() == numerator/denominator`
/// exactly, all values being dyadic.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NoteDef {
    /// Unique within a division's visible set.
    pub id: &'static str,
    /// Fraction label shown on the block.
    pub label: &'static str,
    pub numerator: u64,
    pub denominator: u64,
    /// Duration in beats, quarter note = 1.
    pub beats: f64,
    /// Display style tag, irrelevant to the engine.
    pub color: &'static str,
}
impl NoteDef {
    pub fn fraction(&self) -> Fraction {
        Fraction::new(self.numerator, self.denominator)
    }

    pub fn length(&self) -> Length {
        Length::new(self.numerator, self.denominator)
    }

    /// Portion of a measure as a decimal, e.g. 1/4 → 0.25.
    pub fn decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn is_rest(&self) -> bool {
        self.id == "rest"
    }
}

/// Base tier, visible at every division.
pub const BASE_NOTES: [NoteDef; 4] = [
    NoteDef {
        id: "rest",
        label: "rest",
        numerator: 1,
        denominator: 4,
        beats: 1.0,
        color: "gray",
    },
    NoteDef {
        id: "quarter",
        label: "1/4",
        numerator: 1,
        denominator: 4,
        beats: 1.0,
        color: "blue",
    },
    NoteDef {
        id: "half",
        label: "2/4",
        numerator: 2,
        denominator: 4,
        beats: 2.0,
        color: "green",
    },
    NoteDef {
        id: "whole",
        label: "4/4",
        numerator: 4,
        denominator: 4,
        beats: 4.0,
        color: "purple",
    },
];

/// Additions of the eighth tier.
pub const EIGHTH_NOTES: [NoteDef; 2] = [
    NoteDef {
        id: "eighth",
        label: "1/8",
        numerator: 1,
        denominator: 8,
        beats: 0.5,
        color: "orange",
    },
    NoteDef {
        id: "dotted-quarter",
        label: "3/8",
        numerator: 3,
        denominator: 8,
        beats: 1.5,
        color: "teal",
    },
];

/// Additions of the sixteenth tier.
pub const SIXTEENTH_NOTES: [NoteDef; 2] = [
    NoteDef {
        id: "sixteenth",
        label: "1/16",
        numerator: 1,
        denominator: 16,
        beats: 0.25,
        color: "pink",
    },
    NoteDef {
        id: "dotted-eighth",
        label: "3/16",
        numerator: 3,
        denominator: 16,
        beats: 0.75,
        color: "cyan",
    },
];

/// Visible note set for a division, finest additions first.
///
/// Ordering only matters for display. Deterministic and pure.
pub fn notes_for_division(division: Division) -> Vec<&'static NoteDef> {
    match division {
        Division::Four => BASE_NOTES.iter().collect(),
        Division::Eight => {
            EIGHTH_NOTES.iter().chain(BASE_NOTES.iter()).collect()
        }
        Division::Sixteen => SIXTEENTH_NOTES
            .iter()
            .chain(EIGHTH_NOTES.iter())
            .chain(BASE_NOTES.iter())
            .collect(),
    }
}

/// Look a definition up by id within a division's visible set.
pub fn find_note(division: Division, id: &str) -> Option<&'static NoteDef> {
    notes_for_division(division)
        .into_iter()
        .find(|def| def.id == id)
}

/// Human-readable form of a fraction; a zero numerator reads as a
/// rest.
pub fn fraction_label(numerator: u64, denominator: u64) -> String {
    match numerator {
        0 => "rest".to_string(),
        _ => format!("{}/{}", numerator, denominator),
    }
}
