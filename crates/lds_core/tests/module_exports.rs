//! Integration tests for module exports and the shared pop/reseed contract.

use approx::assert_relative_eq;
use lds_core::LowDiscrepancySequence;

/// Every generator is reachable via absolute path and honours reseed.
#[test]
fn test_sequence_module_exports() {
    use lds_core::sequence::{Circle, Disk, Halton, HaltonN, Sphere, Sphere3Hopf, VdCorput};

    fn restart_is_deterministic<S>(mut seq: S)
    where
        S: LowDiscrepancySequence,
        S::Output: PartialEq + std::fmt::Debug,
    {
        seq.reseed(7);
        let first = seq.pop_batch(32);
        seq.reseed(7);
        assert_eq!(seq.pop_batch(32), first);
    }

    restart_is_deterministic(VdCorput::new(2).unwrap());
    restart_is_deterministic(Halton::new([2, 3]).unwrap());
    restart_is_deterministic(HaltonN::new(&[2, 3, 5, 7]).unwrap());
    restart_is_deterministic(Circle::new(2).unwrap());
    restart_is_deterministic(Disk::new([2, 3]).unwrap());
    restart_is_deterministic(Sphere::new([2, 3]).unwrap());
    restart_is_deterministic(Sphere3Hopf::new([2, 3, 5]).unwrap());
    restart_is_deterministic(lds_core::ilds::VdCorput::new(3, 7).unwrap());
    restart_is_deterministic(lds_core::ilds::Halton::new([2, 3], [11, 7]).unwrap());
}

/// Dimensions reported by each generator match their output length.
#[test]
fn test_dimensions() {
    use lds_core::sequence::{Circle, Disk, HaltonN, Sphere, Sphere3Hopf};

    let mut h = HaltonN::new(&[2, 3, 5]).unwrap();
    assert_eq!(h.dimension(), h.pop().len());
    assert_eq!(Circle::new(2).unwrap().dimension(), 2);
    assert_eq!(Disk::new([2, 3]).unwrap().dimension(), 2);
    assert_eq!(Sphere::new([2, 3]).unwrap().dimension(), 3);
    assert_eq!(Sphere3Hopf::new([2, 3, 5]).unwrap().dimension(), 4);
}

/// Consecutive primes from the table make a valid Halton base list.
#[test]
fn test_prime_table_drives_halton() {
    use lds_core::sequence::HaltonN;
    use lds_core::validation::PRIME_TABLE;

    let mut hgen = HaltonN::new(&PRIME_TABLE[..10]).unwrap();
    hgen.reseed(0);
    let p = hgen.pop();
    for (v, &b) in p.iter().zip(PRIME_TABLE.iter()) {
        assert_relative_eq!(*v, 1.0 / b as f64, epsilon = 1e-15);
    }
}

/// Error types are reachable at the crate root and through `types`.
#[test]
fn test_error_exports() {
    use lds_core::types::error::{InterpolationError, LdsError};

    let err: lds_core::LdsError = LdsError::EmptyBases;
    assert_eq!(format!("{}", err), "Base list cannot be empty");

    let err: lds_core::InterpolationError = InterpolationError::InsufficientData { got: 0, need: 2 };
    assert!(format!("{}", err).contains("need at least 2"));
}

/// Interpolation helpers are reachable via absolute path.
#[test]
fn test_interpolator_exports() {
    use lds_core::math::interpolators::{interpolate, linspace, LinearInterpolator};

    let xs = linspace(0.0, 1.0, 11);
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let interp = LinearInterpolator::new(&xs, &ys).unwrap();
    assert_eq!(interp.interpolate(0.5), interpolate(0.5, &xs, &ys));
}
