//! Low-discrepancy sampler on the unit (n-1)-sphere in R^n.
//!
//! A point in R^n is assembled from one polar angle and a point in R^(n-1):
//!
//! ```text
//! x = (sin ξ · u_1, ..., sin ξ · u_{n-1}, cos ξ)
//! ```
//!
//! where `u` is a point one dimension down and `ξ` is the measure-equalised
//! polar angle read from that dimension's [`AngleTableEntry`]. Unrolled, a
//! sampler is a list of polar levels for dimensions `n, n-1, ..., 4` and a
//! closed-form [`Circle`] or [`Sphere`] leaf for the last two or three
//! coordinates. Construction, `pop` and drop all walk that list, so stack
//! use does not grow with the dimension.
//!
//! The first base drives the outermost polar angle, the next base the
//! level below, and the leaf takes the remaining bases.

use std::sync::Arc;

use lds_core::sequence::{Circle, LowDiscrepancySequence, Sphere, VdCorput};
use lds_core::sync::Synchronized;
use lds_core::LdsError;
use tracing::trace;

use crate::cache::AngleTableCache;
use crate::table::AngleTableEntry;

/// Smallest supported sphere dimension (the circle).
pub const MIN_SPHERE_DIMENSION: usize = 2;

/// A [`SphereSampler`] drivable from several threads through `&self`.
pub type SharedSphereSampler = Synchronized<SphereSampler>;

/// One table-driven polar angle.
#[derive(Debug, Clone)]
struct PolarLevel {
    polar: VdCorput,
    table: Arc<AngleTableEntry>,
}

/// Closed-form generator for the innermost coordinates.
#[derive(Debug, Clone)]
enum Leaf {
    Circle(Circle),
    Sphere(Sphere),
}

impl Leaf {
    /// Builds the leaf from its bases; the last one only pads the list.
    fn build(bases: &[u64]) -> Result<Self, LdsError> {
        let leaf = match *bases {
            [azimuth, padding] => {
                check_padding(padding)?;
                Leaf::Circle(Circle::new(azimuth)?)
            }
            [polar, azimuth, padding] => {
                check_padding(padding)?;
                Leaf::Sphere(Sphere::new([polar, azimuth])?)
            }
            _ => {
                return Err(LdsError::BaseCountMismatch {
                    expected: 3,
                    got: bases.len(),
                })
            }
        };
        Ok(leaf)
    }

    fn reseed(&mut self, seed: u64) {
        match self {
            Leaf::Circle(circle) => circle.reseed(seed),
            Leaf::Sphere(sphere) => sphere.reseed(seed),
        }
    }
}

// The padding base never drives a sequence, so only its range matters.
fn check_padding(base: u64) -> Result<(), LdsError> {
    if base < 2 {
        return Err(LdsError::InvalidBase { base });
    }
    Ok(())
}

/// Low-discrepancy points on the unit sphere in R^n, n >= 2.
///
/// Every popped vector has Euclidean norm 1 up to rounding. Two samplers
/// built from the same bases and reseeded to the same value produce
/// bit-identical output.
///
/// # Examples
///
/// ```
/// use lds_core::LowDiscrepancySequence;
/// use lds_sphere::SphereSampler;
///
/// let mut sgen = SphereSampler::new(5, &[2, 3, 5, 7, 11]).unwrap();
/// sgen.reseed(0);
/// let p = sgen.pop();
/// assert_eq!(p.len(), 5);
/// let norm: f64 = p.iter().map(|x| x * x).sum::<f64>().sqrt();
/// assert!((norm - 1.0).abs() < 1e-9);
///
/// // One base per dimension
/// assert!(SphereSampler::new(5, &[2, 3, 5]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SphereSampler {
    dimension: usize,
    /// Outermost level (dimension n) first
    levels: Vec<PolarLevel>,
    leaf: Leaf,
}

impl SphereSampler {
    /// Creates a sampler backed by the global angle table cache.
    ///
    /// # Arguments
    ///
    /// * `dimension` - Number of coordinates per point, at least 2
    /// * `bases` - One Van der Corput base per coordinate, each at least 2
    ///
    /// # Returns
    ///
    /// * `Ok(SphereSampler)` - Sampler positioned at 0
    /// * `Err(LdsError::InvalidDimension)` - `dimension < 2`
    /// * `Err(LdsError::BaseCountMismatch)` - `bases.len() != dimension`
    /// * `Err(LdsError::InvalidBase)` - Some base below 2
    /// * `Err(LdsError::Interpolation)` - An angle table failed to build
    pub fn new(dimension: usize, bases: &[u64]) -> Result<Self, LdsError> {
        Self::with_cache(dimension, bases, AngleTableCache::global())
    }

    /// Creates a sampler whose angle tables come from `cache`.
    ///
    /// Tables are fetched once here; `pop` never touches the cache.
    pub fn with_cache(
        dimension: usize,
        bases: &[u64],
        cache: &AngleTableCache,
    ) -> Result<Self, LdsError> {
        if dimension < MIN_SPHERE_DIMENSION {
            return Err(LdsError::InvalidDimension {
                dimension,
                min: MIN_SPHERE_DIMENSION,
            });
        }
        if bases.len() != dimension {
            return Err(LdsError::BaseCountMismatch {
                expected: dimension,
                got: bases.len(),
            });
        }

        // Dimensions 2 and 3 are all leaf
        let depth = dimension.saturating_sub(3);
        let levels = bases[..depth]
            .iter()
            .enumerate()
            .map(|(i, &base)| -> Result<PolarLevel, LdsError> {
                Ok(PolarLevel {
                    polar: VdCorput::new(base)?,
                    table: cache.get_table(dimension - i)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            dimension,
            levels,
            leaf: Leaf::build(&bases[depth..])?,
        })
    }

    /// Writes the next point into `out`, replacing its contents.
    ///
    /// Reuses the allocation of `out` across calls.
    pub fn pop_into(&mut self, out: &mut Vec<f64>) {
        out.clear();
        out.resize(self.dimension, 0.0);
        self.fill(out);
    }

    fn fill(&mut self, out: &mut [f64]) {
        let last = self.dimension - 1;
        // Product of the sines of every level above the current one
        let mut scale = 1.0;
        for (i, level) in self.levels.iter_mut().enumerate() {
            let xi = level.table.polar_angle(level.polar.pop());
            let (sin_xi, cos_xi) = xi.sin_cos();
            out[last - i] = scale * cos_xi;
            scale *= sin_xi;
        }

        match &mut self.leaf {
            Leaf::Circle(circle) => {
                for (o, x) in out.iter_mut().zip(circle.pop()) {
                    *o = scale * x;
                }
            }
            Leaf::Sphere(sphere) => {
                for (o, x) in out.iter_mut().zip(sphere.pop()) {
                    *o = scale * x;
                }
            }
        }
    }
}

impl LowDiscrepancySequence for SphereSampler {
    type Output = Vec<f64>;

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn pop(&mut self) -> Vec<f64> {
        let mut out = vec![0.0; self.dimension];
        self.fill(&mut out);
        out
    }

    fn reseed(&mut self, seed: u64) {
        trace!(dimension = self.dimension, seed, "reseeding sphere sampler");
        for level in &mut self.levels {
            level.polar.reseed(seed);
        }
        self.leaf.reseed(seed);
    }
}

/// Creates a [`SphereSampler`] backed by the global angle table cache.
///
/// Shorthand for [`SphereSampler::new`].
pub fn new_sphere_sampler(dimension: usize, bases: &[u64]) -> Result<SphereSampler, LdsError> {
    SphereSampler::new(dimension, bases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use approx::assert_relative_eq;
    use std::io;
    use std::sync::Mutex;

    fn norm(p: &[f64]) -> f64 {
        p.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<F: FnOnce()>(f: F) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_rejects_low_dimension() {
        for dimension in [0, 1] {
            let bases = vec![2; dimension];
            assert_eq!(
                SphereSampler::new(dimension, &bases).unwrap_err(),
                LdsError::InvalidDimension { dimension, min: 2 }
            );
        }
    }

    #[test]
    fn test_rejects_base_count_mismatch() {
        assert_eq!(
            SphereSampler::new(4, &[2, 3, 5]).unwrap_err(),
            LdsError::BaseCountMismatch {
                expected: 4,
                got: 3
            }
        );
        assert_eq!(
            SphereSampler::new(2, &[2, 3, 5]).unwrap_err(),
            LdsError::BaseCountMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_rejects_small_base_at_every_level() {
        // Outer polar, middle polar, sphere leaf, padding
        for bad in 0..5 {
            let mut bases = vec![2, 3, 5, 7, 11];
            bases[bad] = 1;
            assert_eq!(
                SphereSampler::new(5, &bases).unwrap_err(),
                LdsError::InvalidBase { base: 1 }
            );
        }
        assert_eq!(
            SphereSampler::new(2, &[2, 0]).unwrap_err(),
            LdsError::InvalidBase { base: 0 }
        );
    }

    #[test]
    fn test_circle_case() {
        let mut sgen = SphereSampler::new(2, &[2, 3]).unwrap();
        sgen.reseed(0);
        let p = sgen.pop();
        // VdCorput(2) = 0.5: half a turn
        assert_relative_eq!(p[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_case() {
        let mut sgen = SphereSampler::new(3, &[2, 3, 5]).unwrap();
        sgen.reseed(0);
        let p = sgen.pop();
        assert_relative_eq!(p[0], -0.5, epsilon = 1e-12);
        assert_relative_eq!(p[1], 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(p[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_point_with_one_polar_level() {
        let mut sgen = SphereSampler::new(4, &[2, 3, 5, 7]).unwrap();
        sgen.reseed(0);
        let p = sgen.pop();
        // VdCorput(2) = 0.5 puts the outer polar angle on the equator
        assert_relative_eq!(p[3], 0.0, epsilon = 1e-12);
        // Inner sphere draws VdCorput(3) = 1/3 and VdCorput(5) = 1/5
        let cosphi = 2.0 / 3.0 - 1.0;
        assert_relative_eq!(p[2], cosphi, epsilon = 1e-12);
        assert_relative_eq!(norm(&p), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_and_length() {
        let cache = AngleTableCache::new(TableConfig::fast()).unwrap();
        let bases = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for n in 2..=10 {
            let mut sgen = SphereSampler::with_cache(n, &bases[..n], &cache).unwrap();
            assert_eq!(sgen.dimension(), n);
            for _ in 0..200 {
                let p = sgen.pop();
                assert_eq!(p.len(), n);
                assert_relative_eq!(norm(&p), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_pop_into_matches_pop() {
        let mut a = SphereSampler::new(6, &[2, 3, 5, 7, 11, 13]).unwrap();
        let mut b = a.clone();
        let mut buf = vec![42.0; 17];
        for _ in 0..50 {
            b.pop_into(&mut buf);
            assert_eq!(a.pop(), buf);
        }
    }

    #[test]
    fn test_reseed_reaches_every_level() {
        let mut sgen = SphereSampler::new(5, &[2, 3, 5, 7, 11]).unwrap();
        sgen.reseed(10);
        let expected = sgen.pop_batch(20);

        let mut other = SphereSampler::new(5, &[2, 3, 5, 7, 11]).unwrap();
        other.pop_batch(37);
        other.reseed(10);
        assert_eq!(other.pop_batch(20), expected);
    }

    #[test]
    fn test_tables_are_fetched_at_construction() {
        let cache = AngleTableCache::new(TableConfig::fast()).unwrap();
        let mut sgen = SphereSampler::with_cache(6, &[2, 3, 5, 7, 11, 13], &cache).unwrap();
        // Levels 6, 5 and 4 use tables; 3 is the closed-form sphere
        assert_eq!(cache.builds(), 3);
        sgen.pop_batch(100);
        assert_eq!(cache.builds(), 3);
        assert!(!cache.is_cached(3));
    }

    #[test]
    fn test_very_high_dimension_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let cache = AngleTableCache::new(TableConfig::fast()).unwrap();
                let n = 1000;
                let bases: Vec<u64> = (2..n as u64 + 2).collect();
                let mut sgen = SphereSampler::with_cache(n, &bases, &cache).unwrap();
                assert_eq!(cache.builds(), n - 3);
                sgen.reseed(0);
                for _ in 0..20 {
                    let p = sgen.pop();
                    assert_eq!(p.len(), n);
                    assert_relative_eq!(norm(&p), 1.0, epsilon = 1e-9);
                }
                let copy = sgen.clone();
                drop(sgen);
                drop(copy);
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_padding_base_is_range_checked_only() {
        let logs = capture_logs(|| {
            SphereSampler::new(2, &[3, 4]).unwrap();
            SphereSampler::new(3, &[2, 3, 9]).unwrap();
        });
        assert!(!logs.contains("non-prime"), "{}", logs);

        // A composite base that drives a coordinate warns exactly once
        let logs = capture_logs(|| {
            SphereSampler::new(2, &[4, 3]).unwrap();
        });
        assert_eq!(logs.matches("non-prime base").count(), 1, "{}", logs);
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SphereSampler>();
        assert_send_sync::<SharedSphereSampler>();
    }
}
