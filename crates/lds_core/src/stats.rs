//! Uniformity measures for generated point sets.

/// Largest per-axis gap between the sorted coordinates and the uniform grid.
///
/// For each axis the `n` coordinates are sorted and compared against
/// `0, 1/n, ..., (n-1)/n`; the result is the largest absolute difference
/// over all axes. It behaves like a one-dimensional Kolmogorov-Smirnov
/// statistic per axis: roughly `1/sqrt(n)` for i.i.d. uniform samples and
/// close to `log(n)/n` for a good low-discrepancy prefix.
///
/// The axis count is taken from the first point. Returns 0 for an empty
/// set.
///
/// # Example
///
/// ```
/// use lds_core::sequence::{Halton, LowDiscrepancySequence};
/// use lds_core::stats::discrepancy;
///
/// let mut hgen = Halton::new([2, 3]).unwrap();
/// let points = hgen.pop_batch(1000);
/// assert!(discrepancy(&points) < 0.005);
///
/// assert_eq!(discrepancy::<Vec<f64>>(&[]), 0.0);
/// ```
pub fn discrepancy<P: AsRef<[f64]>>(points: &[P]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let n = points.len() as f64;
    let mut axis = Vec::with_capacity(points.len());

    (0..first.as_ref().len())
        .map(|d| {
            axis.clear();
            axis.extend(points.iter().filter_map(|p| p.as_ref().get(d).copied()));
            axis.sort_by(f64::total_cmp);
            axis.iter()
                .enumerate()
                .map(|(i, &x)| (x - i as f64 / n).abs())
                .fold(0.0, f64::max)
        })
        .fold(0.0, f64::max)
}
