//! Error types for structured error handling.
//!
//! This module provides:
//! - `LdsError`: Construction-time contract violations for sequence generators
//! - `InterpolationError`: Errors from building interpolation tables
//!
//! Neither type has a retryable variant. Generators perform no I/O, so every
//! error is a programming error surfaced synchronously at construction.

use thiserror::Error;

/// Interpolation-related errors.
///
/// Raised when an interpolation table is built from invalid data. Queries
/// against a valid table never fail: points outside the domain clamp to the
/// nearest edge value.
///
/// # Variants
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Domain samples are not non-decreasing
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use lds_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("got 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Domain samples decrease somewhere.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Construction errors for low-discrepancy generators.
///
/// # Variants
/// - `InvalidBase`: A digit-reversal base below 2
/// - `EmptyBases`: A multi-axis generator was given no bases
/// - `BaseCountMismatch`: The number of bases does not match the generator
/// - `InvalidDimension`: A dimension below the supported minimum
/// - `InvalidScale`: An integer generator scale that is zero or overflows `u64`
/// - `InvalidConfig`: A configuration value outside its valid range
/// - `Interpolation`: A lookup table could not be built
///
/// # Examples
/// ```
/// use lds_core::types::LdsError;
///
/// let err = LdsError::InvalidBase { base: 1 };
/// assert_eq!(format!("{}", err), "Invalid base 1: must be >= 2");
///
/// let err = LdsError::BaseCountMismatch { expected: 4, got: 3 };
/// assert!(format!("{}", err).contains("expected 4"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LdsError {
    /// Base below 2 (digit reversal is undefined).
    #[error("Invalid base {base}: must be >= 2")]
    InvalidBase {
        /// The rejected base
        base: u64,
    },

    /// No bases supplied to a multi-axis generator.
    #[error("Base list cannot be empty")]
    EmptyBases,

    /// Number of bases differs from what the generator needs.
    #[error("Base count mismatch: expected {expected}, got {got}")]
    BaseCountMismatch {
        /// Number of bases required
        expected: usize,
        /// Number of bases supplied
        got: usize,
    },

    /// Dimension below the supported minimum.
    #[error("Invalid dimension {dimension}: must be >= {min}")]
    InvalidDimension {
        /// The rejected dimension
        dimension: usize,
        /// Minimum supported dimension
        min: usize,
    },

    /// Integer generator scale is zero or `base^scale` overflows `u64`.
    #[error("Invalid scale {scale} for base {base}")]
    InvalidScale {
        /// Base of the generator
        base: u64,
        /// The rejected scale
        scale: u32,
    },

    /// Configuration value outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lookup table construction failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
