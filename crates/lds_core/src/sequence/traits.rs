//! The pull-model contract shared by every generator.

/// Trait for low-discrepancy sequences driven by a position counter.
///
/// A generator owns one position counter per axis. `pop` advances every
/// counter by one and returns the point for the new position; `reseed`
/// moves every counter to `seed`, so the next `pop` returns the point for
/// position `seed + 1`. Two generators built from the same bases and
/// reseeded to the same value produce bit-identical output.
///
/// # Example
///
/// ```
/// use lds_core::sequence::{LowDiscrepancySequence, VdCorput};
///
/// let mut vdc = VdCorput::new(2).unwrap();
/// vdc.reseed(0);
/// assert_eq!(vdc.pop_batch(3), vec![0.5, 0.25, 0.75]);
/// ```
pub trait LowDiscrepancySequence {
    /// The point type produced by one `pop`.
    type Output;

    /// Returns the number of coordinates in each generated point.
    fn dimension(&self) -> usize;

    /// Advances the sequence and returns the next point.
    fn pop(&mut self) -> Self::Output;

    /// Moves the sequence to position `seed`.
    fn reseed(&mut self, seed: u64);

    /// Pops `n` consecutive points.
    fn pop_batch(&mut self, n: usize) -> Vec<Self::Output> {
        (0..n).map(|_| self.pop()).collect()
    }
}
