use crate::traits::FloatScalar;

/// Evaluate the piecewise linear interpolant at `x`.
///
/// Queries outside `[xs[0], xs[n−1]]` clamp to the nearest boundary
/// ordinate — no extrapolation. Inside the range, the bracketing interval
/// is found by a forward scan (the first interval whose right endpoint
/// exceeds `x`, capped at the last interval) and the two bracketing
/// samples are blended linearly.
///
/// Segments are linear on purpose: the sampled curves this crate targets
/// are short and the piecewise blend is read directly off the data. A
/// C²-continuous cubic spline would smooth the segment joins but is a
/// different interpolant, not a drop-in refinement of this one.
///
/// # Example
///
/// ```
/// use envcalc::interp::piecewise_linear;
///
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [0.0, 2.0, 1.0];
/// assert!((piecewise_linear(0.5, &xs, &ys) - 1.0).abs() < 1e-14);
/// // Clamped outside the sampled range
/// assert!((piecewise_linear(-1.0, &xs, &ys) - 0.0).abs() < 1e-14);
/// assert!((piecewise_linear(3.0, &xs, &ys) - 1.0).abs() < 1e-14);
/// ```
pub fn piecewise_linear<T: FloatScalar>(x: T, xs: &[T], ys: &[T]) -> T {
    let n = xs.len();

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    let mut k = 0;
    while x > xs[k + 1] && k < n - 2 {
        k += 1;
    }

    let (x1, x2) = (xs[k], xs[k + 1]);
    let (y1, y2) = (ys[k], ys[k + 1]);
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}
