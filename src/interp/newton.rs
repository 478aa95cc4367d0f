use alloc::vec::Vec;

use crate::traits::FloatScalar;

/// Evaluate the Newton divided-difference interpolating polynomial at `x`.
///
/// Builds the divided-difference coefficients for the samples, then
/// evaluates the Newton form
/// `f[0] + Σₖ f[k]·Πₘ₍₀..k₋₁₎(x − xₘ)`.
///
/// Mathematically this is the same degree-(n−1) polynomial as
/// [`lagrange`](super::lagrange()), expressed in a different basis; the two
/// agree to floating-point tolerance on identical well-formed input. As
/// with `lagrange`, duplicate abscissae degrade the result to a non-finite
/// value rather than an error.
///
/// # Example
///
/// ```
/// use envcalc::interp::newton;
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 8.0, 27.0]; // y = x³
/// assert!((newton(2.5, &xs, &ys) - 15.625).abs() < 1e-10);
/// ```
pub fn newton<T: FloatScalar>(x: T, xs: &[T], ys: &[T]) -> T {
    let coef = newton_coefficients(xs, ys);

    let mut result = coef[0];
    let mut product = T::one();
    for k in 1..coef.len() {
        product = product * (x - xs[k - 1]);
        result = result + coef[k] * product;
    }
    result
}

/// Leading row of the divided-difference table for the given samples.
///
/// `coef[k]` is the order-k divided difference `f[x₀, …, xₖ]`, so the
/// returned buffer is exactly the coefficient vector of the Newton form.
/// Useful when the same samples are evaluated at many query points:
/// build once, then evaluate the Newton form per query in O(n).
///
/// The table recurrence `f[i][j] = (f[i+1][j−1] − f[i][j−1]) / (x[i+j] − x[i])`
/// is run in place over a single buffer; entry `i` is overwritten top-down
/// so each pass consumes the previous order's differences.
///
/// # Example
///
/// ```
/// use envcalc::interp::newton_coefficients;
///
/// // y = x²: second divided difference is constant 1
/// let coef = newton_coefficients(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]);
/// assert!((coef[2] - 1.0).abs() < 1e-14);
/// ```
pub fn newton_coefficients<T: FloatScalar>(xs: &[T], ys: &[T]) -> Vec<T> {
    let n = xs.len();
    let mut coef: Vec<T> = ys.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            coef[i] = (coef[i] - coef[i - 1]) / (xs[i] - xs[i - j]);
        }
    }
    coef
}
