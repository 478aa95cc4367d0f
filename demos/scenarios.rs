// Runs the three bundled scenarios and prints their results as JSON:
//   {"interpolation":{...},"decay":{...},"discharge":{...}}
// Handy for eyeballing the methods side by side or piping into a plotter.

use envcalc::{datasets, interp, ode, quad};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    // Contaminant level at 10:00, three estimators
    let xs = &datasets::CONTAMINANT_HOURS;
    let ys = &datasets::CONTAMINANT_PPM;
    let x = 10.0;
    let interpolation = format!(
        r#"{{"x":{x},"lagrange":{:.6},"newton":{:.6},"piecewise":{:.6}}}"#,
        interp::lagrange(x, xs, ys),
        interp::newton(x, xs, ys),
        interp::piecewise_linear(x, xs, ys),
    );

    // Drug elimination over 3 h with h = 0.5, plus the closed form
    let (k, c0) = (datasets::DECAY_RATE, datasets::DECAY_INITIAL);
    let (h, t_end) = (0.5, 3.0);
    let traj = ode::rk4(k, c0, h, t_end);
    let decay = format!(
        r#"{{"t":{},"rk4":{},"euler_final":{:.6},"heun_final":{:.6},"exact_final":{:.6}}}"#,
        fmt_arr(&traj.t),
        fmt_arr(&traj.c),
        ode::euler(k, c0, h, t_end).final_value(),
        ode::heun(k, c0, h, t_end).final_value(),
        ode::exact_solution(k, c0, t_end),
    );

    // River discharge across a 10 m wide section
    let v = &datasets::RIVER_VELOCITY_MS;
    let d = &datasets::RIVER_DEPTH_M;
    let width = 10.0;
    let discharge = format!(
        r#"{{"trapezoid":{:.6},"simpson13":{:.6},"simpson38":{:.6}}}"#,
        quad::trapezoid(v, d, width).expect("profile has ≥ 2 samples"),
        quad::simpson13(v, d, width).expect("profile has an odd sample count"),
        quad::simpson38(v, d, width).expect("profile has ≥ 4 samples"),
    );

    println!(
        r#"{{"interpolation":{interpolation},"decay":{decay},"discharge":{discharge}}}"#
    );
}
