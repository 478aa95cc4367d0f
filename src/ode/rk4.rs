use crate::traits::FloatScalar;

use super::{Trajectory, integrate_fixed};

/// Single classic 4th-order Runge-Kutta step for dC/dt = −k·C.
///
/// Four slope evaluations per step: at the current state, twice at the
/// midpoint, and at the full step, combined with the standard 1-2-2-1
/// weights.
pub fn rk4_step<T: FloatScalar>(k: T, c: T, h: T) -> T {
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let sixth = T::from(1.0 / 6.0).unwrap();

    let k1 = -k * c;
    let k2 = -k * (c + h * half * k1);
    let k3 = -k * (c + h * half * k2);
    let k4 = -k * (c + h * k3);

    c + h * sixth * (k1 + two * k2 + two * k3 + k4)
}

/// Integrate dC/dt = −k·C with classical 4th-order Runge-Kutta.
///
/// Same stepping policy as [`euler`](super::euler()): `ceil(t_end / h)`
/// uniform steps with the final step shortened to land exactly on `t_end`.
///
/// # Example
///
/// ```
/// use envcalc::ode::{exact_solution, rk4};
///
/// let traj = rk4::<f64>(0.2, 100.0, 0.5, 3.0);
/// let exact = exact_solution(0.2, 100.0, 3.0);
/// assert!((traj.final_value() - exact).abs() < 1e-3);
/// ```
pub fn rk4<T: FloatScalar>(k: T, c0: T, h: T, t_end: T) -> Trajectory<T> {
    integrate_fixed(k, c0, h, t_end, rk4_step)
}
