//! # lds_core: Low-Discrepancy Sequence Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! lds_core is the bottom layer of the workspace, providing:
//! - The pull-model trait `LowDiscrepancySequence` (`sequence`)
//! - Van der Corput, Halton, circle, disk, sphere and Hopf 3-sphere generators (`sequence`)
//! - Integer (fixed-point) Van der Corput and Halton generators (`ilds`)
//! - Clamped piecewise-linear interpolation for lookup tables (`math::interpolators`)
//! - Base validation and the table of small primes (`validation`)
//! - A discrepancy measure for generated point sets (`stats`)
//! - A mutex wrapper for sharing one generator between threads (`sync`)
//! - Error types: `LdsError`, `InterpolationError` (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! Layer 1 has no dependencies on other workspace crates:
//! - num-traits: Generic floating-point interpolation
//! - thiserror: Error derivation
//! - tracing: Diagnostics for questionable but legal inputs (non-prime bases)
//! - serde: Serialisation of error types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lds_core::sequence::{Halton, LowDiscrepancySequence, VdCorput};
//!
//! let mut vdc = VdCorput::new(2).unwrap();
//! vdc.reseed(0);
//! assert_eq!(vdc.pop(), 0.5);
//!
//! let mut halton = Halton::new([2, 3]).unwrap();
//! halton.reseed(0);
//! let [x, y] = halton.pop();
//! assert_eq!(x, 0.5);
//! # assert!((y - 1.0 / 3.0).abs() < 1e-15);
//!
//! // Invalid bases are rejected at construction
//! assert!(VdCorput::new(1).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `LdsError` and `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod ilds;
pub mod math;
pub mod sequence;
pub mod stats;
pub mod sync;
pub mod types;
pub mod validation;

pub use sequence::LowDiscrepancySequence;
pub use types::{InterpolationError, LdsError};
