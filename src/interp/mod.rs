//! Interpolation: Lagrange, Newton divided differences, and piecewise linear.
//!
//! All three estimators operate on the same pair of parallel slices — `xs`
//! strictly increasing, `ys` the matching ordinates — and evaluate at a
//! single query point. They are free functions rather than constructed
//! interpolant objects: the datasets are small and each query is cheap, so
//! there is nothing worth precomputing and caching.
//!
//! Well-formedness of the samples (distinct, sorted `xs`; equal lengths;
//! at least 2 points) is the caller's contract. A degenerate input such as
//! duplicate abscissae does not raise an error; the result degrades to a
//! non-finite value (±∞ or NaN) and propagates to the caller.
//!
//! [`lagrange`] and [`newton`] compute the same degree-(n−1) polynomial in
//! different bases and agree to floating-point tolerance on identical
//! inputs. [`piecewise_linear`] instead blends the two bracketing samples
//! and clamps to the boundary ordinates outside the sampled range.
//!
//! # Examples
//!
//! ```
//! use envcalc::interp;
//!
//! let xs = [0.0_f64, 1.0, 2.0];
//! let ys = [0.0, 1.0, 4.0]; // y = x²
//! assert!((interp::lagrange(1.5, &xs, &ys) - 2.25).abs() < 1e-12);
//! assert!((interp::piecewise_linear(1.5, &xs, &ys) - 2.5).abs() < 1e-12);
//! ```

mod lagrange;
#[cfg(feature = "alloc")]
mod newton;
mod piecewise;


pub use lagrange::lagrange;
#[cfg(feature = "alloc")]
pub use newton::{newton, newton_coefficients};
pub use piecewise::piecewise_linear;
