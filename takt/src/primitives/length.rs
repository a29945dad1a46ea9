use std::ops::{Add, AddAssign};

use fraction::Fraction;

/// Exact span of musical time, in whole-measure units.
///
/// A full 4/4 measure has length 1. Keeping the value as a
/// [`Fraction`] makes sums of catalog notes exact; the decimal view
/// exists only for tolerance comparisons of accumulated values.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Length {
    fraction: Fraction,
}
impl Length {
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            fraction: Fraction::new(numerator, denominator),
        }
    }

    /// One full measure.
    pub fn measure() -> Self {
        Self::new(1, 1)
    }

    pub fn zero() -> Self {
        Self::new(0, 1)
    }

    pub fn get(&self) -> Fraction {
        self.fraction
    }

    pub fn decimal(&self) -> f64 {
        match (self.fraction.numer(), self.fraction.denom()) {
            (Some(numerator), Some(denominator)) => {
                *numerator as f64 / *denominator as f64
            }
            _ => 0.0,
        }
    }
}
impl From<Fraction> for Length {
    fn from(fraction: Fraction) -> Self {
        Self { fraction }
    }
}
impl Add for Length {
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            fraction: self.fraction + rhs.fraction,
        }
    }
    type Output = Self;
}
impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        self.fraction = self.fraction + rhs.fraction;
    }
}
