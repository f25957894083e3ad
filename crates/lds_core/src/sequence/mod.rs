//! # Low-Discrepancy Sequence Generators
//!
//! Deterministic, seedable point generators built on the Van der Corput
//! digit-reversal sequence. Every generator follows the pull model of
//! [`LowDiscrepancySequence`]: `pop` returns the next point, `reseed` jumps
//! to a position.
//!
//! ## Module Structure
//!
//! - [`VdCorput`]: Scalar digit-reversal sequence in `[0, 1)`
//! - [`Halton`], [`HaltonN`]: Points in the unit square / hypercube
//! - [`Circle`], [`Disk`]: Points on the unit circle / in the unit disk
//! - [`Sphere`], [`Sphere3Hopf`]: Points on the 2-sphere / 3-sphere
//!
//! ## Choosing Bases
//!
//! Axes of one generator must use distinct bases, ideally distinct primes
//! (see [`crate::validation::PRIME_TABLE`]). Equal bases on two axes put
//! every point on a diagonal.
//!
//! ## Usage Example
//!
//! ```rust
//! use lds_core::sequence::{LowDiscrepancySequence, Sphere};
//!
//! let mut sgen = Sphere::new([2, 3]).unwrap();
//! sgen.reseed(0);
//! for [x, y, z] in sgen.pop_batch(10) {
//!     assert!((x * x + y * y + z * z - 1.0).abs() < 1e-12);
//! }
//! ```

mod circle;
mod halton;
mod sphere;
mod traits;
mod vdcorput;

pub use circle::{Circle, Disk};
pub use halton::{Halton, HaltonN};
pub use sphere::{Sphere, Sphere3Hopf};
pub use traits::LowDiscrepancySequence;
pub use vdcorput::{vdc, VdCorput};
