//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for generator construction and interpolation tables
//!
//! # Re-exports
//!
//! - [`LdsError`], [`InterpolationError`] from `error`

pub mod error;

pub use error::{InterpolationError, LdsError};
