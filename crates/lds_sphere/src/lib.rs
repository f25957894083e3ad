//! # lds_sphere: Low-Discrepancy Sampling on N-Spheres
//!
//! ## Layer 2 Role
//!
//! lds_sphere builds on lds_core, providing:
//! - Table configuration: resolution, measure method, cache layout (`config`)
//! - Cumulative cap-measure tables per dimension (`table`)
//! - A process-wide, build-once table cache (`cache`)
//! - The sphere sampler and its shared, thread-safe form (`sampler`)
//!
//! ## Dependencies
//!
//! - lds_core: Van der Corput, circle and sphere generators; interpolation;
//!   error types; the `Synchronized` wrapper
//! - rayon: Parallel table prewarming
//! - tracing: Table construction and reseed diagnostics
//! - serde: Serialisation of `TableConfig` (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lds_core::LowDiscrepancySequence;
//! use lds_sphere::{SharedSphereSampler, SphereSampler};
//!
//! let mut sgen = SphereSampler::new(4, &[2, 3, 5, 7]).unwrap();
//! sgen.reseed(0);
//! let p = sgen.pop();
//! let norm: f64 = p.iter().map(|x| x * x).sum::<f64>().sqrt();
//! assert!((norm - 1.0).abs() < 1e-12);
//!
//! // One instance shared between threads
//! let shared = SharedSphereSampler::new(sgen);
//! assert_eq!(shared.pop().len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `TableConfig` and `MeasureMethod`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod cache;
pub mod config;
pub mod sampler;
pub mod table;

pub use cache::{get_table, AngleTableCache};
pub use config::{MeasureMethod, TableConfig};
pub use sampler::{new_sphere_sampler, SharedSphereSampler, SphereSampler};
pub use table::AngleTableEntry;
