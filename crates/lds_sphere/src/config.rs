//! Angle table configuration types.

use lds_core::LdsError;

/// Method used to evaluate the cumulative measure `∫₀^t sin^k(s) ds`.
///
/// Both methods produce a monotone, normalised table; they differ only in
/// rounding behaviour and construction cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasureMethod {
    /// Antiderivative reduction `I_k = (-cos t sin^{k-1} t + (k-1) I_{k-2}) / k`.
    ///
    /// Exact up to rounding; costs `O(k)` per sample.
    #[default]
    ClosedForm,

    /// Composite Simpson rule on each grid interval.
    ///
    /// Costs three `powi` calls per sample regardless of `k`.
    Quadrature,
}

/// Configuration for angle table construction and caching.
///
/// # Example
///
/// ```
/// use lds_sphere::config::{MeasureMethod, TableConfig};
///
/// // Use default configuration
/// let config = TableConfig::default();
/// assert_eq!(config.resolution, 1000);
/// assert_eq!(config.method, MeasureMethod::ClosedForm);
///
/// // Custom configuration
/// let custom = TableConfig::new(4000, MeasureMethod::Quadrature).unwrap();
/// assert_eq!(custom.resolution, 4000);
///
/// // Too few samples
/// assert!(TableConfig::new(1, MeasureMethod::ClosedForm).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    /// Number of samples `M` over `[0, π/2]`, endpoints included.
    ///
    /// Linear interpolation error shrinks as `1/M²`; 1000 samples keep it
    /// well below the discrepancy of any practical point count.
    pub resolution: usize,

    /// How the cumulative measure is evaluated.
    pub method: MeasureMethod,

    /// Dimensions `3 .. 3 + preallocated_dimensions` are served from
    /// lock-free once-cells; higher dimensions go through a locked map.
    pub preallocated_dimensions: usize,
}

impl Default for TableConfig {
    /// Default values:
    /// - `resolution`: 1000
    /// - `method`: `ClosedForm`
    /// - `preallocated_dimensions`: 64
    fn default() -> Self {
        Self {
            resolution: 1000,
            method: MeasureMethod::ClosedForm,
            preallocated_dimensions: 64,
        }
    }
}

impl TableConfig {
    /// Minimum number of table samples.
    pub const MIN_RESOLUTION: usize = 2;

    /// Create a configuration with the given resolution and method.
    ///
    /// # Returns
    ///
    /// * `Ok(TableConfig)` - Valid configuration
    /// * `Err(LdsError::InvalidConfig)` - `resolution < 2`
    pub fn new(resolution: usize, method: MeasureMethod) -> Result<Self, LdsError> {
        let config = Self {
            resolution,
            method,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Coarse tables for short runs and tests.
    pub fn fast() -> Self {
        Self {
            resolution: 256,
            ..Self::default()
        }
    }

    /// Dense tables for very long runs.
    pub fn high_precision() -> Self {
        Self {
            resolution: 10_000,
            ..Self::default()
        }
    }

    /// Checks the configuration, e.g. after deserialisation.
    pub fn validate(&self) -> Result<(), LdsError> {
        if self.resolution < Self::MIN_RESOLUTION {
            return Err(LdsError::InvalidConfig(format!(
                "resolution must be >= {}, got {}",
                Self::MIN_RESOLUTION,
                self.resolution
            )));
        }
        Ok(())
    }
}
