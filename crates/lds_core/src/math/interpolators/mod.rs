//! Interpolation methods for lookup tables.
//!
//! Lookup tables map a uniformly drawn parameter onto a measure-equalised
//! one. The interpolation never extrapolates: a query outside the table
//! clamps to the nearest edge value, which absorbs floating-point noise at
//! the table boundaries.
//!
//! ## Available Items
//!
//! - [`interpolate`]: Free function over borrowed `(domain, codomain)` slices
//! - [`LinearInterpolator`]: Owning, validated piecewise-linear table
//! - [`linspace`]: Evenly spaced grid samples
//!
//! ## Example
//!
//! ```
//! use lds_core::math::interpolators::{interpolate, linspace};
//!
//! let xs = linspace(0.0, 3.0, 4);
//! let ys: [f64; 4] = [0.0, 1.0, 4.0, 9.0];
//!
//! assert!((interpolate(1.5, &xs, &ys) - 2.5).abs() < 1e-12);
//! assert_eq!(interpolate(-1.0, &xs, &ys), 0.0);
//! assert_eq!(interpolate(7.0, &xs, &ys), 9.0);
//! ```

mod linear;

pub use linear::{interpolate, linspace, LinearInterpolator};
