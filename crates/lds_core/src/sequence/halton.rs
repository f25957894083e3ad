//! Halton sequences: one Van der Corput axis per base.

use super::{LowDiscrepancySequence, VdCorput};
use crate::types::LdsError;
use crate::validation::validate_bases;

/// Two-dimensional Halton sequence generator.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{Halton, LowDiscrepancySequence};
///
/// let mut hgen = Halton::new([2, 3]).unwrap();
/// hgen.reseed(0);
/// let [x, y] = hgen.pop();
/// assert_eq!(x, 0.5);
/// assert!((y - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct Halton {
    vdc0: VdCorput,
    vdc1: VdCorput,
}

impl Halton {
    /// Creates a generator with one base per axis.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc0: VdCorput::new(base[0])?,
            vdc1: VdCorput::new(base[1])?,
        })
    }
}

impl LowDiscrepancySequence for Halton {
    type Output = [f64; 2];

    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        [self.vdc0.pop(), self.vdc1.pop()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
    }
}

/// Halton sequence generator in an arbitrary number of dimensions.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{HaltonN, LowDiscrepancySequence};
///
/// let mut hgen = HaltonN::new(&[2, 3, 5]).unwrap();
/// hgen.reseed(0);
/// let p = hgen.pop();
/// assert_eq!(p.len(), 3);
/// assert_eq!(p[0], 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct HaltonN {
    vdcs: Vec<VdCorput>,
}

impl HaltonN {
    /// Creates a generator with one axis per base.
    ///
    /// # Returns
    ///
    /// * `Ok(HaltonN)` - One axis per base
    /// * `Err(LdsError::EmptyBases)` - `base` is empty
    /// * `Err(LdsError::InvalidBase)` - A base below 2
    pub fn new(base: &[u64]) -> Result<Self, LdsError> {
        validate_bases(base)?;
        let vdcs = base.iter().map(|&b| VdCorput::with_valid_base(b)).collect();
        Ok(Self { vdcs })
    }
}

impl LowDiscrepancySequence for HaltonN {
    type Output = Vec<f64>;

    fn dimension(&self) -> usize {
        self.vdcs.len()
    }

    fn pop(&mut self) -> Vec<f64> {
        self.vdcs.iter_mut().map(|vdc| vdc.pop()).collect()
    }

    fn reseed(&mut self, seed: u64) {
        for vdc in &mut self.vdcs {
            vdc.reseed(seed);
        }
    }
}
