//! Van der Corput digit-reversal sequence.
//!
//! Position `k` written in base `b` as `d_0 + d_1 b + d_2 b^2 + ...` maps to
//! `d_0 / b + d_1 / b^2 + d_2 / b^3 + ...`, i.e. the digits mirrored around
//! the radix point.

use super::LowDiscrepancySequence;
use crate::types::LdsError;
use crate::validation::validate_base;

/// Number of precomputed reciprocal powers.
///
/// A `u64` position has at most 64 digits in base 2, so 64 weights cover
/// every position for every base.
const WEIGHT_COUNT: usize = 64;

/// Largest `f64` strictly below 1.
const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Van der Corput value of index `k` in `base`.
///
/// # Returns
///
/// * `Ok(value)` - The digit-reversed value in `[0, 1)`
/// * `Err(LdsError::InvalidBase)` - `base < 2`
///
/// # Example
///
/// ```
/// use lds_core::sequence::vdc;
///
/// assert_eq!(vdc(11, 2).unwrap(), 0.8125);
/// assert_eq!(vdc(1, 3).unwrap(), 1.0 / 3.0);
/// assert!(vdc(5, 1).is_err());
/// ```
pub fn vdc(k: u64, base: u64) -> Result<f64, LdsError> {
    if base < 2 {
        return Err(LdsError::InvalidBase { base });
    }
    let mut k = k;
    let mut res = 0.0;
    let mut denom = 1.0;
    let b = base as f64;
    while k != 0 {
        denom *= b;
        res += (k % base) as f64 / denom;
        k /= base;
    }
    Ok(res.min(MAX_BELOW_ONE))
}

/// Van der Corput sequence generator.
///
/// Keeps a position counter and a table of `base^-1 .. base^-64`, so each
/// `pop` costs one division per digit of the position and no powers.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{LowDiscrepancySequence, VdCorput};
///
/// let mut vgen = VdCorput::new(2).unwrap();
/// vgen.reseed(0);
/// assert_eq!(vgen.pop(), 0.5);
/// assert_eq!(vgen.pop(), 0.25);
/// assert_eq!(vgen.pop(), 0.75);
/// assert_eq!(vgen.position(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct VdCorput {
    base: u64,
    position: u64,
    weights: [f64; WEIGHT_COUNT],
}

impl VdCorput {
    /// Creates a generator at position 0.
    ///
    /// # Returns
    ///
    /// * `Ok(VdCorput)` - Any base >= 2 (non-prime bases log a warning)
    /// * `Err(LdsError::InvalidBase)` - `base < 2`
    pub fn new(base: u64) -> Result<Self, LdsError> {
        validate_base(base)?;
        Ok(Self::with_valid_base(base))
    }

    /// Builds the weight table for a base that has already been validated.
    pub(crate) fn with_valid_base(base: u64) -> Self {
        let mut weights = [0.0; WEIGHT_COUNT];
        let mut reverse = 1.0;
        let b = base as f64;
        for w in weights.iter_mut() {
            reverse /= b;
            *w = reverse;
        }

        Self {
            base,
            position: 0,
            weights,
        }
    }

    /// Returns the base.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the position of the last popped value.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Digit-reversed value of position `k`, without moving the counter.
    pub fn value_at(&self, k: u64) -> f64 {
        let mut k = k;
        let mut res = 0.0;
        let mut i = 0;
        while k != 0 {
            let remainder = k % self.base;
            k /= self.base;
            if remainder != 0 {
                res += remainder as f64 * self.weights[i];
            }
            i += 1;
        }
        // Positions beyond 2^53 can round the sum up to 1.0
        res.min(MAX_BELOW_ONE)
    }
}

impl LowDiscrepancySequence for VdCorput {
    type Output = f64;

    #[inline]
    fn dimension(&self) -> usize {
        1
    }

    /// Advances the position (wrapping at `u64::MAX`) and returns its value.
    #[inline]
    fn pop(&mut self) -> f64 {
        self.position = self.position.wrapping_add(1);
        self.value_at(self.position)
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        self.position = seed;
    }
}
