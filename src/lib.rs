//! # envcalc
//!
//! Classical numerical methods for small sampled datasets, no-std compatible.
//! Covers the three workhorses of an introductory numerical-analysis toolbox:
//! polynomial interpolation, fixed-step ODE integration for first-order linear
//! decay, and composite quadrature over uniformly sampled data.
//!
//! Every routine is a pure function of its inputs: no internal state, no I/O,
//! no locking. Identical inputs always yield identical outputs, and all
//! routines may be called concurrently with disjoint inputs.
//!
//! ## Quick start
//!
//! ```
//! use envcalc::interp;
//!
//! // Hourly contaminant readings; estimate the level at 10:00
//! let hours = [6.0_f64, 8.0, 12.0, 16.0, 20.0];
//! let ppm = [45.0, 52.0, 65.0, 70.0, 58.0];
//!
//! let a = interp::lagrange(10.0, &hours, &ppm);
//! let b = interp::newton(10.0, &hours, &ppm);
//! assert!((a - b).abs() < 1e-9); // same polynomial, different basis
//! ```
//!
//! ## Modules
//!
//! - [`interp`] — Lagrange, Newton divided-difference, and piecewise linear
//!   interpolation over parallel `(x, y)` sample slices. Slice-in, value-out;
//!   no allocation except for the Newton coefficient buffer.
//!
//! - [`ode`] — Euler, Heun, and classical RK4 fixed-step integrators for the
//!   scalar decay equation dC/dt = −k·C, each returning a full [`Trajectory`]
//!   that ends exactly at the requested time. Requires the `alloc` feature.
//!
//! - [`quad`] — Composite trapezoidal, Simpson 1/3, and Simpson 3/8 rules
//!   over uniformly sampled integrands, scaled by a physical width. Rules
//!   whose structural precondition fails return [`QuadError`] instead of a
//!   number.
//!
//! - [`datasets`] — The three bundled illustrative datasets: a contaminant
//!   time series, pharmacokinetic decay parameters, and a river
//!   cross-section velocity profile.
//!
//! - [`traits`] — The [`FloatScalar`] element trait (`f32`, `f64`) that all
//!   routines are generic over.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std | [`ode`] module and Newton coefficient buffer |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod datasets;
pub mod interp;
#[cfg(feature = "alloc")]
pub mod ode;
pub mod quad;
pub mod traits;

#[cfg(feature = "alloc")]
pub use ode::Trajectory;
pub use quad::QuadError;
pub use traits::{FloatScalar, Scalar};
