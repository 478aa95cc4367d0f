use super::*;

const K: f64 = 0.2;
const C0: f64 = 100.0;

// ── Trajectory shape ────────────────────────────────────────────────

#[test]
fn shape_when_h_divides_evenly() {
    // 3.0 / 0.5 = 6 steps exactly, no overshoot correction
    for traj in [euler(K, C0, 0.5, 3.0), heun(K, C0, 0.5, 3.0), rk4(K, C0, 0.5, 3.0)] {
        assert_eq!(traj.len(), 7);
        assert_eq!(traj.t[0], 0.0);
        assert_eq!(traj.c[0], C0);
        assert_eq!(traj.final_time(), 3.0);
        assert_eq!(traj.t.len(), traj.c.len());
    }
}

#[test]
fn shape_when_h_overshoots() {
    // ceil(1.0 / 0.4) = 3 steps; the uniform grid ends at 1.2 and the
    // final entry must be pinned back to exactly 1.0
    for traj in [euler(K, C0, 0.4, 1.0), heun(K, C0, 0.4, 1.0), rk4(K, C0, 0.4, 1.0)] {
        assert_eq!(traj.len(), 4);
        assert_eq!(traj.t[0], 0.0);
        assert_eq!(traj.final_time(), 1.0);
    }
}

#[test]
fn shape_with_inexact_quotient() {
    // 0.3 / 0.1 is 2.999… in binary; ceil still gives 3 steps and the
    // accumulated 0.30000000000000004 gets pinned to 0.3
    let traj = rk4(K, C0, 0.1, 0.3);
    assert_eq!(traj.len(), 4);
    assert_eq!(traj.final_time(), 0.3);
}

#[test]
fn single_oversized_step() {
    // h larger than t_end: one step, recomputed over [0, t_end]
    let traj = rk4(K, C0, 2.0, 1.0);
    assert_eq!(traj.len(), 2);
    assert_eq!(traj.final_time(), 1.0);
    assert!((traj.final_value() - rk4_step(K, C0, 1.0)).abs() < 1e-15);
}

#[test]
fn times_strictly_increasing() {
    let traj = heun(K, C0, 0.4, 1.0);
    for i in 1..traj.len() {
        assert!(traj.t[i] > traj.t[i - 1], "t not increasing at {i}");
    }
}

// ── Per-method values ───────────────────────────────────────────────

#[test]
fn euler_hand_computed() {
    // C_n = C0·(1 − k·h)^n with k·h = 0.1: 100·0.9⁶ = 53.1441
    let traj = euler(K, C0, 0.5, 3.0);
    assert!((traj.final_value() - 53.1441).abs() < 1e-9);
}

#[test]
fn step_functions_match_drivers() {
    let h = 0.5;
    assert!((euler(K, C0, h, 3.0).c[1] - euler_step(K, C0, h)).abs() < 1e-15);
    assert!((heun(K, C0, h, 3.0).c[1] - heun_step(K, C0, h)).abs() < 1e-15);
    assert!((rk4(K, C0, h, 3.0).c[1] - rk4_step(K, C0, h)).abs() < 1e-15);
}

#[test]
fn rk4_closer_than_euler() {
    // k = 0.2, C0 = 100, h = 0.5, t_end = 3.0; exact ≈ 54.8812
    let exact = exact_solution(K, C0, 3.0);
    assert!((exact - 54.8812).abs() < 1e-4);

    let e_err = (euler(K, C0, 0.5, 3.0).final_value() - exact).abs();
    let r_err = (rk4(K, C0, 0.5, 3.0).final_value() - exact).abs();
    assert!(r_err < e_err, "rk4 err {r_err} not below euler err {e_err}");
}

#[test]
fn exact_solution_at_zero() {
    assert_eq!(exact_solution(K, C0, 0.0), C0);
}

// ── Convergence order ───────────────────────────────────────────────

fn endpoint_err(method: fn(f64, f64, f64, f64) -> Trajectory<f64>, h: f64) -> f64 {
    let exact = exact_solution(K, C0, 3.0);
    (method(K, C0, h, 3.0).final_value() - exact).abs()
}

#[test]
fn euler_first_order() {
    let ratio = endpoint_err(euler, 0.5) / endpoint_err(euler, 0.25);
    assert!((1.8..2.4).contains(&ratio), "euler ratio {ratio}");
}

#[test]
fn heun_second_order() {
    let ratio = endpoint_err(heun, 0.5) / endpoint_err(heun, 0.25);
    assert!((3.5..4.8).contains(&ratio), "heun ratio {ratio}");
}

#[test]
fn rk4_fourth_order() {
    let ratio = endpoint_err(rk4, 0.5) / endpoint_err(rk4, 0.25);
    assert!((14.0..20.0).contains(&ratio), "rk4 ratio {ratio}");
}

// ── f32 ─────────────────────────────────────────────────────────────

#[test]
fn euler_f32() {
    let traj = euler(0.2_f32, 100.0, 0.5, 3.0);
    assert_eq!(traj.len(), 7);
    assert!((traj.final_value() - 53.1441).abs() < 1e-3);
}
