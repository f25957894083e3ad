//! Closed-form planar generators: unit circle and unit disk.

use std::f64::consts::TAU;

use super::{LowDiscrepancySequence, VdCorput};
use crate::types::LdsError;

/// Points on the unit circle.
///
/// One Van der Corput value `v` maps to the angle `2πv`; the point is
/// `[cos θ, sin θ]`.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{Circle, LowDiscrepancySequence};
///
/// let mut cgen = Circle::new(2).unwrap();
/// cgen.reseed(0);
/// let [c, s] = cgen.pop();
/// assert!((c + 1.0).abs() < 1e-12);
/// assert!(s.abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Circle {
    vdc: VdCorput,
}

impl Circle {
    /// Creates a generator with the given azimuth base.
    pub fn new(base: u64) -> Result<Self, LdsError> {
        Ok(Self {
            vdc: VdCorput::new(base)?,
        })
    }

    /// Returns the azimuth base.
    pub fn base(&self) -> u64 {
        self.vdc.base()
    }
}

impl LowDiscrepancySequence for Circle {
    type Output = [f64; 2];

    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        let theta = self.vdc.pop() * TAU;
        let (s, c) = theta.sin_cos();
        [c, s]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
    }
}

/// Points uniformly filling the unit disk.
///
/// The angle comes from the first base and the radius from the square root
/// of the second, which makes the density uniform in area.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{Disk, LowDiscrepancySequence};
///
/// let mut dgen = Disk::new([2, 3]).unwrap();
/// for [x, y] in dgen.pop_batch(100) {
///     assert!(x * x + y * y <= 1.0);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Disk {
    vdc0: VdCorput,
    vdc1: VdCorput,
}

impl Disk {
    /// Creates a generator from `[angle_base, radius_base]`.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc0: VdCorput::new(base[0])?,
            vdc1: VdCorput::new(base[1])?,
        })
    }
}

impl LowDiscrepancySequence for Disk {
    type Output = [f64; 2];

    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        let theta = self.vdc0.pop() * TAU;
        let radius = self.vdc1.pop().sqrt();
        let (s, c) = theta.sin_cos();
        [radius * c, radius * s]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
    }
}
