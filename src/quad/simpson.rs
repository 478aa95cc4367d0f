use crate::traits::FloatScalar;

use super::QuadError;

/// Composite Simpson 1/3 rule over uniformly sampled data.
///
/// `width·(h/3)·(f₀ + f_{n−1} + 4·Σ odd + 2·Σ even interior)`. Requires an
/// even number of intervals — an odd sample count — and at least three
/// samples; returns [`QuadError`] otherwise. Exact for integrands up to
/// cubic on each pair of subintervals.
///
/// # Example
///
/// ```
/// use envcalc::quad::{QuadError, simpson13};
///
/// // ∫₀¹ x² dx = 1/3, recovered exactly from 3 samples
/// let q = simpson13(&[0.0_f64, 0.25, 1.0], &[0.0, 0.5, 1.0], 1.0).unwrap();
/// assert!((q - 1.0 / 3.0).abs() < 1e-14);
///
/// // Four samples: even count, not applicable
/// let r = simpson13(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0], 1.0);
/// assert_eq!(r, Err(QuadError::EvenSampleCount));
/// ```
pub fn simpson13<T: FloatScalar>(
    velocity: &[T],
    depth: &[T],
    width: T,
) -> Result<T, QuadError> {
    let n = velocity.len();
    if n % 2 == 0 {
        return Err(QuadError::EvenSampleCount);
    }
    if n < 3 {
        return Err(QuadError::TooFewPoints);
    }

    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();
    let h = depth[1] - depth[0];

    let mut sum = velocity[0] + velocity[n - 1];
    for i in (1..n - 1).step_by(2) {
        sum = sum + four * velocity[i];
    }
    for i in (2..n - 1).step_by(2) {
        sum = sum + two * velocity[i];
    }

    Ok(width * h / three * sum)
}

/// Composite Simpson 3/8 rule with trapezoidal remainder.
///
/// Partitions the `n − 1` intervals into `⌊(n−1)/3⌋` complete 4-point
/// groups, each contributing `(3h/8)·(fᵢ + 3fᵢ₊₁ + 3fᵢ₊₂ + fᵢ₊₃)`. The one
/// or two leftover intervals are each covered by a single trapezoid, so a
/// result is always produced for n ≥ 4 regardless of whether the interval
/// count is a multiple of 3. Fewer than four samples returns [`QuadError`].
///
/// # Example
///
/// ```
/// use envcalc::quad::simpson38;
///
/// // ∫₀¹ x³ dx = 1/4 from one complete 4-point group
/// let depth = [0.0_f64, 1.0 / 3.0, 2.0 / 3.0, 1.0];
/// let velocity = depth.map(|x| x * x * x);
/// let q = simpson38(&velocity, &depth, 1.0).unwrap();
/// assert!((q - 0.25).abs() < 1e-12);
/// ```
pub fn simpson38<T: FloatScalar>(
    velocity: &[T],
    depth: &[T],
    width: T,
) -> Result<T, QuadError> {
    let n = velocity.len();
    if n < 4 {
        return Err(QuadError::TooFewPoints);
    }

    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let eight = T::from(8.0).unwrap();
    let h = depth[1] - depth[0];

    let groups = (n - 1) / 3;
    let mut sum = T::zero();
    for g in 0..groups {
        let i = g * 3;
        sum = sum
            + three * h / eight
                * (velocity[i]
                    + three * velocity[i + 1]
                    + three * velocity[i + 2]
                    + velocity[i + 3]);
    }

    // Leftover intervals (n − 1 mod 3): one trapezoid each
    for i in (groups * 3)..(n - 1) {
        sum = sum + h / two * (velocity[i] + velocity[i + 1]);
    }

    Ok(width * sum)
}
