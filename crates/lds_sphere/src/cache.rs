//! Process-wide, build-once cache of angle tables.
//!
//! Every sampler of dimension `n` reads the same immutable
//! [`AngleTableEntry`], so the cache hands out `Arc` clones and builds each
//! table at most once per cache instance.
//!
//! # Caching Strategy
//!
//! - Dimensions `3 .. 3 + preallocated_dimensions` live in a fixed vector of
//!   `OnceLock` slots: reads after the first build take no lock at all
//! - Higher dimensions go through an `RwLock<HashMap>` with double-check
//!   locking, so concurrent first requests still build once
//! - A build is logged at `debug` level; hits are silent
//!
//! # Example
//!
//! ```rust
//! use lds_sphere::cache::AngleTableCache;
//! use lds_sphere::config::TableConfig;
//! use std::sync::Arc;
//!
//! let cache = AngleTableCache::new(TableConfig::fast()).unwrap();
//!
//! // First call builds and caches the table
//! let t1 = cache.get_table(5).unwrap();
//!
//! // Second call returns the cached Arc
//! let t2 = cache.get_table(5).unwrap();
//!
//! assert!(Arc::ptr_eq(&t1, &t2));
//! assert_eq!(cache.builds(), 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use lds_core::LdsError;
use rayon::prelude::*;
use tracing::debug;

use crate::config::TableConfig;
use crate::table::{AngleTableEntry, MIN_TABLE_DIMENSION};

static GLOBAL: OnceLock<AngleTableCache> = OnceLock::new();

/// Thread-safe angle table cache keyed by dimension.
#[derive(Debug)]
pub struct AngleTableCache {
    config: TableConfig,
    /// Slot `i` holds the build result for dimension `i + 3`.
    slots: Vec<OnceLock<Result<Arc<AngleTableEntry>, LdsError>>>,
    overflow: RwLock<HashMap<usize, Arc<AngleTableEntry>>>,
    builds: AtomicUsize,
}

impl AngleTableCache {
    /// Creates an empty cache.
    ///
    /// # Returns
    ///
    /// * `Ok(AngleTableCache)` - Empty cache using `config` for every build
    /// * `Err(LdsError::InvalidConfig)` - Invalid `config`
    pub fn new(config: TableConfig) -> Result<Self, LdsError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: TableConfig) -> Self {
        let slots = (0..config.preallocated_dimensions)
            .map(|_| OnceLock::new())
            .collect();
        Self {
            config,
            slots,
            overflow: RwLock::new(HashMap::new()),
            builds: AtomicUsize::new(0),
        }
    }

    /// The cache shared by [`get_table`] and by samplers built with
    /// [`SphereSampler::new`](crate::sampler::SphereSampler::new).
    ///
    /// Uses [`TableConfig::default`].
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::default)
    }

    /// Returns the configuration used for every build.
    #[inline]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of tables this cache has built so far.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    /// Whether the table for `dimension` has been built.
    pub fn is_cached(&self, dimension: usize) -> bool {
        if dimension < MIN_TABLE_DIMENSION {
            return false;
        }
        match self.slots.get(dimension - MIN_TABLE_DIMENSION) {
            Some(slot) => matches!(slot.get(), Some(Ok(_))),
            None => self
                .overflow
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(&dimension),
        }
    }

    /// Retrieves or builds the table for `dimension`.
    ///
    /// Concurrent first requests for the same dimension block until a single
    /// build completes, then all receive the same `Arc`.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<AngleTableEntry>)` - Shared, immutable table
    /// * `Err(LdsError::InvalidDimension)` - `dimension < 3`
    /// * `Err(LdsError::Interpolation)` - The sampled measure is not a valid table
    pub fn get_table(&self, dimension: usize) -> Result<Arc<AngleTableEntry>, LdsError> {
        if dimension < MIN_TABLE_DIMENSION {
            return Err(LdsError::InvalidDimension {
                dimension,
                min: MIN_TABLE_DIMENSION,
            });
        }

        if let Some(slot) = self.slots.get(dimension - MIN_TABLE_DIMENSION) {
            return slot.get_or_init(|| self.build(dimension)).clone();
        }

        // Fast path: read lock check
        {
            let cache = self.overflow.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = cache.get(&dimension) {
                return Ok(Arc::clone(table));
            }
        }

        // Slow path: write lock with double-check
        let mut cache = self.overflow.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = cache.get(&dimension) {
            return Ok(Arc::clone(table));
        }

        let table = self.build(dimension)?;
        cache.insert(dimension, Arc::clone(&table));
        Ok(table)
    }

    /// Builds the tables for `dimensions` in parallel.
    ///
    /// Already cached dimensions are skipped. Stops at the first dimension
    /// that fails; tables built before the failure stay cached.
    pub fn prewarm(&self, dimensions: &[usize]) -> Result<(), LdsError> {
        dimensions
            .par_iter()
            .try_for_each(|&dimension| self.get_table(dimension).map(|_| ()))
    }

    fn build(&self, dimension: usize) -> Result<Arc<AngleTableEntry>, LdsError> {
        debug!(
            dimension,
            resolution = self.config.resolution,
            method = ?self.config.method,
            "building angle table"
        );
        self.builds.fetch_add(1, Ordering::AcqRel);
        AngleTableEntry::build_validated(dimension, &self.config).map(Arc::new)
    }
}

impl Default for AngleTableCache {
    fn default() -> Self {
        Self::with_valid_config(TableConfig::default())
    }
}

/// Retrieves or builds the table for `dimension` from the global cache.
///
/// # Example
///
/// ```rust
/// let table = lds_sphere::get_table(4).unwrap();
/// assert_eq!(table.dimension(), 4);
/// assert!(lds_sphere::get_table(2).is_err());
/// ```
pub fn get_table(dimension: usize) -> Result<Arc<AngleTableEntry>, LdsError> {
    AngleTableCache::global().get_table(dimension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn small_cache(preallocated_dimensions: usize) -> AngleTableCache {
        AngleTableCache::new(TableConfig {
            preallocated_dimensions,
            ..TableConfig::fast()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_low_dimension() {
        let cache = small_cache(4);
        for dimension in [0, 1, 2] {
            assert_eq!(
                cache.get_table(dimension).unwrap_err(),
                LdsError::InvalidDimension { dimension, min: 3 }
            );
            assert!(!cache.is_cached(dimension));
        }
        assert_eq!(cache.builds(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = TableConfig {
            resolution: 0,
            ..TableConfig::default()
        };
        assert!(matches!(
            AngleTableCache::new(config),
            Err(LdsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_slot_and_overflow_paths_build_once() {
        let cache = small_cache(2);

        // Slots cover 3 and 4, 5 and 9 overflow
        for dimension in [3, 4, 5, 9] {
            assert!(!cache.is_cached(dimension));
            let first = cache.get_table(dimension).unwrap();
            let second = cache.get_table(dimension).unwrap();
            assert!(Arc::ptr_eq(&first, &second));
            assert!(cache.is_cached(dimension));
            assert_eq!(first.dimension(), dimension);
            assert_eq!(first.len(), cache.config().resolution);
        }
        assert_eq!(cache.builds(), 4);
    }

    #[test]
    fn test_cached_table_matches_direct_build() {
        let cache = small_cache(8);
        let cached = cache.get_table(6).unwrap();
        let direct = AngleTableEntry::build(6, cache.config()).unwrap();
        assert_eq!(*cached, direct);
    }

    #[test]
    fn test_concurrent_first_access() {
        let cache = Arc::new(small_cache(2));
        let dimensions = [3, 4, 7, 11];

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cache = Arc::clone(&cache);
                let dimension = dimensions[i % dimensions.len()];
                thread::spawn(move || cache.get_table(dimension).unwrap())
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(cache.builds(), dimensions.len());
        for (i, table) in tables.iter().enumerate() {
            let again = cache.get_table(dimensions[i % dimensions.len()]).unwrap();
            assert!(Arc::ptr_eq(table, &again));
        }
    }

    #[test]
    fn test_prewarm() {
        let cache = small_cache(4);
        cache.prewarm(&[3, 5, 8, 20, 5, 3]).unwrap();
        assert_eq!(cache.builds(), 4);
        for dimension in [3, 5, 8, 20] {
            assert!(cache.is_cached(dimension));
        }
        assert!(!cache.is_cached(4));

        assert!(cache.prewarm(&[6, 2]).is_err());
        assert!(!cache.is_cached(2));
    }

    #[test]
    fn test_global_cache_is_shared() {
        let a = get_table(7).unwrap();
        let b = AngleTableCache::global().get_table(7).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(AngleTableCache::global().config(), &TableConfig::default());
    }
}
