//! Clamped linear interpolation implementation.

use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise-linear interpolation of `x` against `(domain, codomain)`.
///
/// - `x` equal to a domain sample returns the paired codomain sample
/// - `x` strictly between two samples interpolates linearly
/// - `x` below `domain[0]` or above the last sample clamps to the edge value
///
/// `domain` must be non-decreasing and both slices must have the same,
/// non-zero length. When the domain repeats a value, a query at that value
/// returns the codomain sample paired with the last repetition.
///
/// Uses binary search, O(log n). NaN queries clamp to the lower edge.
///
/// # Formula
///
/// ```text
/// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
/// ```
///
/// # Example
///
/// ```
/// use lds_core::math::interpolators::interpolate;
///
/// let domain: [f64; 3] = [0.0, 1.0, 2.0];
/// let codomain = [0.0, 2.0, 4.0];
///
/// assert_eq!(interpolate(1.0, &domain, &codomain), 2.0);
/// assert!((interpolate(0.25, &domain, &codomain) - 0.5).abs() < 1e-12);
/// assert_eq!(interpolate(2.5, &domain, &codomain), 4.0);
/// ```
pub fn interpolate<T: Float>(x: T, domain: &[T], codomain: &[T]) -> T {
    debug_assert_eq!(domain.len(), codomain.len());
    debug_assert!(!domain.is_empty());

    let last = domain.len() - 1;
    // Index of the first sample strictly greater than x
    let pos = domain.partition_point(|&xi| xi <= x);

    if pos == 0 {
        return codomain[0];
    }
    if pos > last {
        return codomain[last];
    }

    // domain[i] <= x < domain[i + 1], so the segment has positive width
    let i = pos - 1;
    let x0 = domain[i];
    let x1 = domain[i + 1];
    let y0 = codomain[i];
    let y1 = codomain[i + 1];

    let t = (x - x0) / (x1 - x0);
    y0 + (y1 - y0) * t
}

/// `num` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The last sample is exactly `stop`. `num == 1` yields `[start]` and
/// `num == 0` yields an empty vector.
///
/// # Example
///
/// ```
/// use lds_core::math::interpolators::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, stop: T, num: usize) -> Vec<T> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let steps = T::from(num - 1).unwrap_or_else(T::one);
            let step = (stop - start) / steps;
            let mut xs: Vec<T> = (0..num)
                .map(|i| start + step * T::from(i).unwrap_or_else(T::zero))
                .collect();
            xs[num - 1] = stop;
            xs
        }
    }
}

/// Owning piecewise-linear interpolator with edge clamping.
///
/// Stores validated `(x, y)` samples. Construction checks the data once so
/// that every later query is infallible.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lds_core::math::interpolators::LinearInterpolator;
///
/// let interp = LinearInterpolator::<f64>::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(interp.domain(), (0.0, 2.0));
/// assert!((interp.interpolate(1.5) - 2.5).abs() < 1e-12);
/// assert_eq!(interp.interpolate(3.0), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator<T: Float> {
    /// Non-decreasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct an interpolator from x and y samples.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or NaN samples
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` decreases somewhere
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        if xs.iter().chain(ys.iter()).any(|v| v.is_nan()) {
            return Err(InterpolationError::InvalidInput(
                "samples must not contain NaN".to_string(),
            ));
        }

        if let Some(index) = xs.windows(2).position(|w| w[1] < w[0]) {
            return Err(InterpolationError::NonMonotonicData { index: index + 1 });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Interpolated value at `x`, clamped to the edge values outside the domain.
    #[inline]
    pub fn interpolate(&self, x: T) -> T {
        interpolate(x, &self.xs, &self.ys)
    }

    /// Returns the `(x_min, x_max)` range covered by the samples.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
