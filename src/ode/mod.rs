//! Fixed-step explicit integrators for first-order linear decay.
//!
//! All three methods solve the same scalar ODE, dC/dt = −k·C with
//! C(0) = C0, over `[0, t_end]` with uniform step `h`, and return the full
//! discretized [`Trajectory`]. They differ only in the per-step update:
//!
//! | Method    | Order | Derivative evals / step |
//! |-----------|-------|-------------------------|
//! | [`euler`] |     1 |                       1 |
//! | [`heun`]  |     2 |                       2 |
//! | [`rk4`]   |     4 |                       4 |
//!
//! The step count is `ceil(t_end / h)`, so the uniform grid may overshoot
//! `t_end` when `h` does not divide it evenly. Every integrator then
//! recomputes the final step with the same method's update over the
//! shortened interval and pins the last time entry to exactly `t_end`.
//! Trajectories therefore always terminate at the requested end time, at
//! the cost of a non-uniform final step.
//!
//! Each method converges at the order of its class against the closed-form
//! solution C(t) = C0·e^(−k·t) (see [`exact_solution`]): halving `h`
//! shrinks the endpoint error by ~2× for Euler, ~4× for Heun, and ~16×
//! for RK4.
//!
//! Single-step updates ([`euler_step`], [`heun_step`], [`rk4_step`]) are
//! exposed for callers that drive their own time loop.
//!
//! # Example
//!
//! ```
//! use envcalc::ode;
//!
//! // First-order elimination: k = 0.2 h⁻¹, C0 = 100 mg/L
//! let traj = ode::rk4::<f64>(0.2, 100.0, 0.5, 3.0);
//! let exact = ode::exact_solution(0.2, 100.0, 3.0);
//! assert_eq!(traj.len(), 7);
//! assert!((traj.final_value() - exact).abs() < 1e-3);
//! ```

mod euler;
mod heun;
mod rk4;

#[cfg(test)]
mod tests;

pub use euler::{euler, euler_step};
pub use heun::{heun, heun_step};
pub use rk4::{rk4, rk4_step};

use alloc::vec::Vec;

use crate::traits::FloatScalar;

/// Discretized solution of a decay integration.
///
/// Two parallel sequences: `t[0] = 0` and `t` strictly increasing up to
/// exactly the requested end time; `c[i]` is the state at `t[i]`, with
/// `c[0]` the initial value. Produced trajectories always contain at least
/// one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T> {
    /// Time points, from 0 to the requested end time inclusive.
    pub t: Vec<T>,
    /// State value at each time point.
    pub c: Vec<T>,
}

impl<T: FloatScalar> Trajectory<T> {
    /// Number of time points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// `true` if the trajectory holds no points.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// The last time point — exactly the requested end time.
    pub fn final_time(&self) -> T {
        self.t[self.t.len() - 1]
    }

    /// The state at the last time point.
    pub fn final_value(&self) -> T {
        self.c[self.c.len() - 1]
    }
}

/// Closed-form solution C0·e^(−k·t) of the decay equation.
///
/// ```
/// use envcalc::ode::exact_solution;
///
/// let c = exact_solution::<f64>(0.2, 100.0, 3.0);
/// assert!((c - 54.88116360940264).abs() < 1e-9);
/// ```
pub fn exact_solution<T: FloatScalar>(k: T, c0: T, t: T) -> T {
    c0 * (-k * t).exp()
}

/// Shared fixed-step driver: march `ceil(t_end / h)` uniform steps, then
/// redo the last step over the shortened interval if the grid overshot.
///
/// `step(k, c, h)` advances the state by one step of the caller's method;
/// the overshoot correction reuses the same closure so the final segment
/// is integrated with identical order.
fn integrate_fixed<T: FloatScalar>(
    k: T,
    c0: T,
    h: T,
    t_end: T,
    step: impl Fn(T, T, T) -> T,
) -> Trajectory<T> {
    let steps = (t_end / h).ceil().to_usize().unwrap_or(0);

    let mut t = Vec::with_capacity(steps + 1);
    let mut c = Vec::with_capacity(steps + 1);
    t.push(T::zero());
    c.push(c0);

    for i in 0..steps {
        let next = step(k, c[i], h);
        let tn = t[i] + h;
        c.push(next);
        t.push(tn);
    }

    // Pin the endpoint: accumulation may drift past t_end when h does not
    // divide it evenly.
    let last = t.len() - 1;
    if last > 0 && t[last] > t_end {
        let last_step = t_end - t[last - 1];
        c[last] = step(k, c[last - 1], last_step);
        t[last] = t_end;
    }

    Trajectory { t, c }
}
