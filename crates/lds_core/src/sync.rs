//! Per-instance synchronisation for sharing one generator between threads.
//!
//! A generator's `pop` is a read-increment-compute step on its position
//! counters. [`Synchronized`] runs that step under a mutex, so concurrent
//! callers on the same instance receive distinct, consecutive positions:
//! the interleaving is equivalent to some serial order of the calls.
//! Distinct instances share nothing and need no coordination.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::sequence::LowDiscrepancySequence;

/// A generator behind a mutex, drivable through `&self`.
///
/// # Examples
///
/// ```
/// use lds_core::sequence::VdCorput;
/// use lds_core::sync::Synchronized;
/// use std::sync::Arc;
///
/// let shared = Arc::new(Synchronized::new(VdCorput::new(2).unwrap()));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         std::thread::spawn(move || shared.pop())
///     })
///     .collect();
///
/// let mut values: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
/// values.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(values, vec![0.125, 0.25, 0.5, 0.75]);
/// ```
#[derive(Debug)]
pub struct Synchronized<S> {
    inner: Mutex<S>,
}

impl<S: LowDiscrepancySequence> Synchronized<S> {
    /// Wraps a generator.
    pub fn new(sequence: S) -> Self {
        Self {
            inner: Mutex::new(sequence),
        }
    }

    /// Pops the next point under the lock.
    pub fn pop(&self) -> S::Output {
        self.lock().pop()
    }

    /// Pops `n` consecutive points under a single lock acquisition.
    pub fn pop_batch(&self, n: usize) -> Vec<S::Output> {
        self.lock().pop_batch(n)
    }

    /// Moves the generator to position `seed`.
    pub fn reseed(&self, seed: u64) {
        self.lock().reseed(seed);
    }

    /// Returns the number of coordinates in each point.
    pub fn dimension(&self) -> usize {
        self.lock().dimension()
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> S {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic while holding the lock cannot leave the counters half-updated,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: LowDiscrepancySequence> From<S> for Synchronized<S> {
    fn from(sequence: S) -> Self {
        Self::new(sequence)
    }
}
