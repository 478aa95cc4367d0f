use crate::traits::FloatScalar;

/// Evaluate the Lagrange interpolating polynomial at `x`.
///
/// Computes the unique degree-(n−1) polynomial through the samples in the
/// Lagrange basis, `Σᵢ yᵢ·Πⱼ≠ᵢ (x−xⱼ)/(xᵢ−xⱼ)`, directly from the product
/// form. Cost is O(n²) per query.
///
/// The caller must supply distinct abscissae: a repeated `xs` value makes a
/// basis denominator zero, and the result degrades to ±∞ or NaN rather
/// than an error.
///
/// # Example
///
/// ```
/// use envcalc::interp::lagrange;
///
/// // y = x² — exact through 3 points
/// let xs = [0.0_f64, 1.0, 2.0];
/// let ys = [0.0, 1.0, 4.0];
/// assert!((lagrange(1.5, &xs, &ys) - 2.25).abs() < 1e-12);
/// ```
pub fn lagrange<T: FloatScalar>(x: T, xs: &[T], ys: &[T]) -> T {
    let n = xs.len();
    let mut result = T::zero();

    for i in 0..n {
        let mut term = ys[i];
        for j in 0..n {
            if j != i {
                term = term * (x - xs[j]) / (xs[i] - xs[j]);
            }
        }
        result = result + term;
    }
    result
}
