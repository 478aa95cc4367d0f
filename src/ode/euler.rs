use crate::traits::FloatScalar;

use super::{Trajectory, integrate_fixed};

/// Single forward Euler step for dC/dt = −k·C.
///
/// First-order: advances `c` by `h` using the slope at the current state.
pub fn euler_step<T: FloatScalar>(k: T, c: T, h: T) -> T {
    c + h * (-k * c)
}

/// Integrate dC/dt = −k·C with the explicit Euler method.
///
/// Marches `ceil(t_end / h)` uniform steps from `C(0) = c0`; if the grid
/// overshoots `t_end`, the last step is redone over the shortened interval
/// so the trajectory ends exactly at `t_end`.
///
/// # Example
///
/// ```
/// use envcalc::ode::euler;
///
/// let traj = euler::<f64>(0.2, 100.0, 0.5, 3.0);
/// assert_eq!(traj.len(), 7);
/// assert!((traj.final_time() - 3.0).abs() < 1e-15);
/// assert!((traj.c[0] - 100.0).abs() < 1e-15);
/// ```
pub fn euler<T: FloatScalar>(k: T, c0: T, h: T, t_end: T) -> Trajectory<T> {
    integrate_fixed(k, c0, h, t_end, euler_step)
}
