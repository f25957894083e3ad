//! Numerical helpers shared by the generators.
//!
//! - [`interpolators`]: Clamped piecewise-linear interpolation and grid helpers

pub mod interpolators;
