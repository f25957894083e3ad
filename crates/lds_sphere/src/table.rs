//! Cumulative cap-measure tables.
//!
//! On the unit (n-1)-sphere in R^n, the polar angle `θ` of a uniform point
//! has density proportional to `sin^{n-2} θ` on `[0, π]` (the Jacobian of
//! spherical coordinates). The table for dimension n samples
//!
//! ```text
//! G_n(t) = ∫₀^t sin^{n-2}(s) ds / ∫₀^{π/2} sin^{n-2}(s) ds,   t ∈ [0, π/2]
//! ```
//!
//! i.e. the normalised measure of the spherical cap of half-angle `t`
//! relative to a hemisphere. The density is symmetric about `π/2`, so the
//! half range determines the whole polar distribution.

use std::f64::consts::{FRAC_PI_2, PI};

use lds_core::math::interpolators::{linspace, LinearInterpolator};
use lds_core::LdsError;

use crate::config::{MeasureMethod, TableConfig};

/// Smallest dimension with a table; lower dimensions use closed forms.
pub const MIN_TABLE_DIMENSION: usize = 3;

/// Sampled cumulative cap measure for one dimension.
///
/// Immutable once built. `domain` holds `M` evenly spaced angles over
/// `[0, π/2]` and `codomain` the matching values of `G_n`, non-decreasing
/// from exactly 0 to exactly 1. The samples are held twice, once per lookup
/// direction.
///
/// # Example
///
/// ```
/// use lds_sphere::config::TableConfig;
/// use lds_sphere::table::AngleTableEntry;
///
/// let table = AngleTableEntry::build(4, &TableConfig::default()).unwrap();
/// assert_eq!(table.domain()[0], 0.0);
/// assert_eq!(table.codomain()[table.len() - 1], 1.0);
///
/// // Half of the sphere lies above the equator
/// assert!((table.polar_measure(std::f64::consts::FRAC_PI_2) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTableEntry {
    dimension: usize,
    /// Angle to measure
    forward: LinearInterpolator<f64>,
    /// Measure to angle
    inverse: LinearInterpolator<f64>,
}

impl AngleTableEntry {
    /// Builds the table for `dimension`.
    ///
    /// # Returns
    ///
    /// * `Ok(AngleTableEntry)` - The sampled cumulative measure
    /// * `Err(LdsError::InvalidDimension)` - `dimension < 3`
    /// * `Err(LdsError::InvalidConfig)` - Invalid `config`
    /// * `Err(LdsError::Interpolation)` - The sampled measure is not a valid table
    pub fn build(dimension: usize, config: &TableConfig) -> Result<Self, LdsError> {
        if dimension < MIN_TABLE_DIMENSION {
            return Err(LdsError::InvalidDimension {
                dimension,
                min: MIN_TABLE_DIMENSION,
            });
        }
        config.validate()?;
        Self::build_validated(dimension, config)
    }

    /// Builds the table; the caller has validated `dimension` and `config`.
    pub(crate) fn build_validated(
        dimension: usize,
        config: &TableConfig,
    ) -> Result<Self, LdsError> {
        let domain = linspace(0.0, FRAC_PI_2, config.resolution);
        let exponent = (dimension - 2) as i32;

        let raw = match config.method {
            MeasureMethod::ClosedForm => closed_form_measure(exponent, &domain),
            MeasureMethod::Quadrature => quadrature_measure(exponent, &domain),
        };

        Self::from_samples(dimension, &domain, &normalise(raw))
    }

    fn from_samples(dimension: usize, domain: &[f64], codomain: &[f64]) -> Result<Self, LdsError> {
        Ok(Self {
            dimension,
            forward: LinearInterpolator::new(domain, codomain)?,
            inverse: LinearInterpolator::new(codomain, domain)?,
        })
    }

    /// Returns the sphere dimension `n` (points live in R^n).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the angle samples over `[0, π/2]`.
    #[inline]
    pub fn domain(&self) -> &[f64] {
        self.forward.xs()
    }

    /// Returns the normalised cumulative measure at each angle sample.
    #[inline]
    pub fn codomain(&self) -> &[f64] {
        self.forward.ys()
    }

    /// Returns the number of samples `M`.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Always false for a built table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// `G_n(angle)`: cap measure relative to a hemisphere, clamped to
    /// `[0, 1]` outside `[0, π/2]`.
    #[inline]
    pub fn cumulative(&self, angle: f64) -> f64 {
        self.forward.interpolate(angle)
    }

    /// Fraction of the whole sphere with polar angle at most `theta`,
    /// for `theta` in `[0, π]`.
    pub fn polar_measure(&self, theta: f64) -> f64 {
        if theta <= FRAC_PI_2 {
            0.5 * self.cumulative(theta)
        } else {
            1.0 - 0.5 * self.cumulative(PI - theta)
        }
    }

    /// Measure-equalised polar angle in `[0, π]` for a uniform `u` in `[0, 1)`.
    ///
    /// Reads the table from codomain to domain: the lower half of `u` is
    /// spread over the northern hemisphere, the upper half is mirrored onto
    /// the southern one. The map is continuous and increasing in `u`, and
    /// `polar_measure(polar_angle(u)) == u` up to rounding.
    pub fn polar_angle(&self, u: f64) -> f64 {
        if u < 0.5 {
            self.inverse.interpolate(2.0 * u)
        } else {
            PI - self.inverse.interpolate(2.0 - 2.0 * u)
        }
    }
}

/// `∫₀^t sin^k` at every grid angle via the reduction formula.
fn closed_form_measure(k: i32, domain: &[f64]) -> Vec<f64> {
    domain
        .iter()
        .map(|&t| {
            let (sin_t, cos_t) = t.sin_cos();
            let sin_sq = sin_t * sin_t;
            // I_0 = t, I_1 = 1 - cos t; sin_pow tracks sin^{j+1} t
            let (mut j, mut acc, mut sin_pow) = if k % 2 == 0 {
                (0, t, sin_t)
            } else {
                (1, 1.0 - cos_t, sin_sq)
            };
            while j < k {
                j += 2;
                acc = (-cos_t * sin_pow + f64::from(j - 1) * acc) / f64::from(j);
                sin_pow *= sin_sq;
            }
            acc
        })
        .collect()
}

/// `∫₀^t sin^k` at every grid angle via Simpson's rule per interval.
fn quadrature_measure(k: i32, domain: &[f64]) -> Vec<f64> {
    let f = |s: f64| s.sin().powi(k);
    let mut acc = 0.0;
    let mut out = Vec::with_capacity(domain.len());
    out.push(0.0);
    for w in domain.windows(2) {
        let (a, b) = (w[0], w[1]);
        let mid = 0.5 * (a + b);
        acc += (b - a) / 6.0 * (f(a) + 4.0 * f(mid) + f(b));
        out.push(acc);
    }
    out
}

/// Scales to end at 1, removes rounding dips and pins both endpoints.
fn normalise(raw: Vec<f64>) -> Vec<f64> {
    let last = raw.len() - 1;
    let total = raw[last];
    let mut running = 0.0_f64;
    let mut out: Vec<f64> = raw
        .into_iter()
        .map(|v| {
            running = running.max(v / total).min(1.0);
            running
        })
        .collect();
    out[0] = 0.0;
    out[last] = 1.0;
    out
}
