//! Integer low-discrepancy sequences.
//!
//! Fixed-point counterparts of [`crate::sequence::VdCorput`] and
//! [`crate::sequence::Halton`]: a generator with base `b` and scale `m`
//! returns `vdc(k) * b^m` computed exactly in integer arithmetic, i.e. the
//! `m` lowest base-`b` digits of the position mirrored into an `m`-digit
//! integer.

use crate::sequence::LowDiscrepancySequence;
use crate::types::LdsError;
use crate::validation::{validate_base, validate_scale};

/// Integer Van der Corput sequence generator.
///
/// # Examples
///
/// ```
/// use lds_core::ilds::VdCorput;
/// use lds_core::sequence::LowDiscrepancySequence;
///
/// let mut vdc = VdCorput::new(2, 10).unwrap();
/// vdc.reseed(0);
/// assert_eq!(vdc.pop(), 512); // 0.5 * 2^10
/// ```
#[derive(Debug, Clone)]
pub struct VdCorput {
    base: u64,
    scale: u32,
    position: u64,
    factor: u64,
}

impl VdCorput {
    /// Creates a generator producing integers in `[0, base^scale)`.
    ///
    /// # Returns
    ///
    /// * `Ok(VdCorput)` - Valid base and scale
    /// * `Err(LdsError::InvalidBase)` - `base < 2`
    /// * `Err(LdsError::InvalidScale)` - `scale == 0` or `base^scale` overflows `u64`
    pub fn new(base: u64, scale: u32) -> Result<Self, LdsError> {
        validate_base(base)?;
        let factor = validate_scale(base, scale)?;
        Ok(Self {
            base,
            scale,
            position: 0,
            factor,
        })
    }

    /// Returns the base.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Returns the number of digits kept.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `base^scale`, the exclusive upper bound of the output.
    pub fn factor(&self) -> u64 {
        self.factor
    }
}

impl LowDiscrepancySequence for VdCorput {
    type Output = u64;

    fn dimension(&self) -> usize {
        1
    }

    fn pop(&mut self) -> u64 {
        self.position = self.position.wrapping_add(1);
        let mut k = self.position;
        let mut factor = self.factor;
        let mut vdc = 0;
        // Digits beyond `scale` fall below the fixed-point resolution
        while k != 0 && factor > 1 {
            factor /= self.base;
            vdc += (k % self.base) * factor;
            k /= self.base;
        }
        vdc
    }

    fn reseed(&mut self, seed: u64) {
        self.position = seed;
    }
}

/// Integer Halton sequence generator.
///
/// # Examples
///
/// ```
/// use lds_core::ilds::Halton;
/// use lds_core::sequence::LowDiscrepancySequence;
///
/// let mut hgen = Halton::new([2, 3], [11, 7]).unwrap();
/// hgen.reseed(0);
/// assert_eq!(hgen.pop(), [1024, 729]);
/// ```
#[derive(Debug, Clone)]
pub struct Halton {
    vdc0: VdCorput,
    vdc1: VdCorput,
}

impl Halton {
    /// Creates a generator with one `(base, scale)` pair per axis.
    pub fn new(base: [u64; 2], scale: [u32; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc0: VdCorput::new(base[0], scale[0])?,
            vdc1: VdCorput::new(base[1], scale[1])?,
        })
    }
}

impl LowDiscrepancySequence for Halton {
    type Output = [u64; 2];

    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [u64; 2] {
        [self.vdc0.pop(), self.vdc1.pop()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
    }
}
