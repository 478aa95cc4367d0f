use crate::traits::FloatScalar;

use super::QuadError;

/// Composite trapezoidal rule over uniformly sampled data.
///
/// `width·(h/2)·(f₀ + f_{n−1} + 2·Σ interior)` with
/// `h = depth[1] − depth[0]`. Applicable whenever there are at least two
/// samples; exact for integrands that are linear on every subinterval.
///
/// # Example
///
/// ```
/// use envcalc::quad::trapezoid;
///
/// // Constant unit velocity over 2 m of depth, 1 m wide
/// let q = trapezoid(&[1.0_f64, 1.0, 1.0], &[0.0, 1.0, 2.0], 1.0).unwrap();
/// assert!((q - 2.0).abs() < 1e-14);
/// ```
pub fn trapezoid<T: FloatScalar>(
    velocity: &[T],
    depth: &[T],
    width: T,
) -> Result<T, QuadError> {
    let n = velocity.len();
    if n < 2 {
        return Err(QuadError::TooFewPoints);
    }

    let two = T::from(2.0).unwrap();
    let h = depth[1] - depth[0];

    let mut sum = velocity[0] + velocity[n - 1];
    for &v in &velocity[1..n - 1] {
        sum = sum + two * v;
    }

    Ok(width * h / two * sum)
}
