//! Common-denominator arithmetic over raw numerator/denominator pairs.
//!
//! The catalog only ever produces denominators from {4, 8, 16}, but
//! the functions here stay general: the same code is reused by the
//! partitioner, the display layer and the test harness.

use std::fmt;

/// Euclidean greatest common divisor. `gcd(a, 0) == a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    match b {
        0 => a,
        _ => gcd(b, a % b),
    }
}

/// Least common multiple. Callers never pass zero denominators.
pub fn lcm(a: u64, b: u64) -> u64 {
    a * b / gcd(a, b)
}

/// Bring a fraction to lowest terms.
///
/// A zero numerator still reduces the denominator by
/// `gcd(0, d) == d`, so `reduce(0, d) == (0, 1)`.
///
/// # Example
/// ```
/// # use takt::primitives::reduce;
/// assert_eq!(reduce(2, 4), (1, 2));
/// assert_eq!(reduce(3, 8), (3, 8));
/// ```
pub fn reduce(numerator: u64, denominator: u64) -> (u64, u64) {
    let divisor = gcd(numerator, denominator);
    (numerator / divisor, denominator / divisor)
}

/// Sum of fractions, reduced, with the decimal value kept alongside.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FractionTotal {
    pub numerator: u64,
    pub denominator: u64,
    /// Ratio of the pre-reduction totals. Reducing first and dividing
    /// after would compound rounding, so this is computed before
    /// `reduce` runs.
    pub decimal: f64,
}
impl fmt::Display for FractionTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Sum `(numerator, denominator)` pairs over a common denominator.
///
/// The common denominator is the iterated LCM of all denominators,
/// seeded with the first element's. An empty input sums to `0/1`.
///
/// # Example
/// ```
/// # use takt::primitives::{sum_fractions, FractionTotal};
/// assert_eq!(
///     sum_fractions(&[(1, 4), (1, 4), (1, 4), (1, 4)]),
///     FractionTotal { numerator: 1, denominator: 1, decimal: 1.0 }
/// );
/// assert_eq!(
///     sum_fractions(&[(1, 8), (1, 8)]),
///     FractionTotal { numerator: 1, denominator: 4, decimal: 0.25 }
/// );
/// ```
pub fn sum_fractions(fractions: &[(u64, u64)]) -> FractionTotal {
    let first_denominator = match fractions.first() {
        None => {
            return FractionTotal {
                numerator: 0,
                denominator: 1,
                decimal: 0.0,
            }
        }
        Some((_, denominator)) => *denominator,
    };
    let common = fractions
        .iter()
        .fold(first_denominator, |acc, (_, denominator)| {
            lcm(acc, *denominator)
        });
    let total: u64 = fractions
        .iter()
        .map(|(numerator, denominator)| numerator * common / denominator)
        .sum();
    let (numerator, denominator) = reduce(total, common);
    FractionTotal {
        numerator,
        denominator,
        decimal: total as f64 / common as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::{gcd, lcm, reduce, sum_fractions, FractionTotal};

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, 0), 4);
        assert_eq!(gcd(0, 4), 4);
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(3, 16), 1);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 8), 8);
        assert_eq!(lcm(8, 16), 16);
        assert_eq!(lcm(4, 4), 4);
    }

    #[test]
    fn test_reduce_catalog_pairs() {
        let expected = [
            ((1, 4), (1, 4)),
            ((2, 4), (1, 2)),
            ((4, 4), (1, 1)),
            ((1, 8), (1, 8)),
            ((3, 8), (3, 8)),
            ((1, 16), (1, 16)),
            ((3, 16), (3, 16)),
        ];
        for ((n, d), reduced) in expected {
            assert_eq!(reduce(n, d), reduced);
        }
    }

    #[test]
    fn test_reduce_zero_numerator() {
        assert_eq!(reduce(0, 4), (0, 1));
        assert_eq!(reduce(0, 16), (0, 1));
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(
            sum_fractions(&[]),
            FractionTotal {
                numerator: 0,
                denominator: 1,
                decimal: 0.0
            }
        );
    }

    #[test]
    fn test_sum_mixed_denominators() {
        // 1/4 + 3/8 + 3/16 + 3/16 = 16/16
        let total = sum_fractions(&[(1, 4), (3, 8), (3, 16), (3, 16)]);
        assert_eq!(total.numerator, 1);
        assert_eq!(total.denominator, 1);
        assert_eq!(total.decimal, 1.0);

        let total = sum_fractions(&[(1, 8), (1, 16)]);
        assert_eq!(total.numerator, 3);
        assert_eq!(total.denominator, 16);
        assert_eq!(total.decimal, 0.1875);
    }

    #[test]
    fn test_total_display() {
        assert_eq!(sum_fractions(&[(1, 8), (1, 8)]).to_string(), "1/4");
    }
}
