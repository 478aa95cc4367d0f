use crate::traits::FloatScalar;

use super::{Trajectory, integrate_fixed};

/// Single Heun (predictor-corrector) step for dC/dt = −k·C.
///
/// Second-order: predicts with the Euler slope, re-evaluates the slope at
/// the predicted state, and averages the two.
pub fn heun_step<T: FloatScalar>(k: T, c: T, h: T) -> T {
    let half = T::from(0.5).unwrap();

    let predictor = -k * c;
    let cp = c + h * predictor;
    let corrector = -k * cp;
    c + h * half * (predictor + corrector)
}

/// Integrate dC/dt = −k·C with Heun's predictor-corrector method.
///
/// Same stepping policy as [`euler`](super::euler()): `ceil(t_end / h)`
/// uniform steps with the final step shortened to land exactly on `t_end`.
///
/// # Example
///
/// ```
/// use envcalc::ode::{exact_solution, heun};
///
/// let traj = heun::<f64>(0.2, 100.0, 0.5, 3.0);
/// let exact = exact_solution(0.2, 100.0, 3.0);
/// assert!((traj.final_value() - exact).abs() < 0.1);
/// ```
pub fn heun<T: FloatScalar>(k: T, c0: T, h: T, t_end: T) -> Trajectory<T> {
    integrate_fixed(k, c0, h, t_end, heun_step)
}
