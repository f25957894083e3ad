//! Closed-form sphere generators: the ordinary 2-sphere and the 3-sphere via
//! the Hopf fibration.

use std::f64::consts::TAU;

use super::{Circle, LowDiscrepancySequence, VdCorput};
use crate::types::LdsError;

/// Points on the unit sphere in R^3.
///
/// Archimedes' hat-box theorem: a uniform `cos φ` on `[-1, 1]` combined with
/// a uniform azimuth gives a uniform point on the sphere.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{LowDiscrepancySequence, Sphere};
///
/// let mut sgen = Sphere::new([2, 3]).unwrap();
/// sgen.reseed(0);
/// let [x, y, z] = sgen.pop();
/// assert!(z.abs() < 1e-12);
/// assert!((x * x + y * y + z * z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Sphere {
    vdc: VdCorput,
    cirgen: Circle,
}

impl Sphere {
    /// Creates a generator from `[polar_base, azimuth_base]`.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc: VdCorput::new(base[0])?,
            cirgen: Circle::new(base[1])?,
        })
    }
}

impl LowDiscrepancySequence for Sphere {
    type Output = [f64; 3];

    fn dimension(&self) -> usize {
        3
    }

    fn pop(&mut self) -> [f64; 3] {
        let cosphi = 2.0 * self.vdc.pop() - 1.0;
        let sinphi = (1.0 - cosphi * cosphi).sqrt();
        let [c, s] = self.cirgen.pop();
        [sinphi * c, sinphi * s, cosphi]
    }

    fn reseed(&mut self, seed: u64) {
        self.cirgen.reseed(seed);
        self.vdc.reseed(seed);
    }
}

/// Points on the unit 3-sphere in R^4 via the Hopf fibration.
///
/// Two uniform angles `φ`, `ψ` and `cos η = sqrt(v)` give
/// `[cos η cos ψ, cos η sin ψ, sin η cos(φ + ψ), sin η sin(φ + ψ)]`.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::{LowDiscrepancySequence, Sphere3Hopf};
///
/// let mut sgen = Sphere3Hopf::new([2, 3, 5]).unwrap();
/// let p = sgen.pop();
/// let norm: f64 = p.iter().map(|x| x * x).sum::<f64>().sqrt();
/// assert!((norm - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Sphere3Hopf {
    vdc0: VdCorput,
    vdc1: VdCorput,
    vdc2: VdCorput,
}

impl Sphere3Hopf {
    /// Creates a generator from `[phi_base, psi_base, eta_base]`.
    pub fn new(base: [u64; 3]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc0: VdCorput::new(base[0])?,
            vdc1: VdCorput::new(base[1])?,
            vdc2: VdCorput::new(base[2])?,
        })
    }
}

impl LowDiscrepancySequence for Sphere3Hopf {
    type Output = [f64; 4];

    fn dimension(&self) -> usize {
        4
    }

    fn pop(&mut self) -> [f64; 4] {
        let phi = self.vdc0.pop() * TAU;
        let psy = self.vdc1.pop() * TAU;
        let vd = self.vdc2.pop();
        let cos_eta = vd.sqrt();
        let sin_eta = (1.0 - vd).sqrt();
        let (s_psy, c_psy) = psy.sin_cos();
        let (s_sum, c_sum) = (phi + psy).sin_cos();
        [
            cos_eta * c_psy,
            cos_eta * s_psy,
            sin_eta * c_sum,
            sin_eta * s_sum,
        ]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
        self.vdc2.reseed(seed);
    }
}
