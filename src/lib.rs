//! Piecewise linear interpolation of a function tabulated on an equispaced grid.
//!
//! [EquispacedLinear] stores function values together with first, second and third derivative
//! samples and an integral type auxiliary array. Any of them can be evaluated at an arbitrary point
//! with O(1) cell lookup; a [Bracket] computed once by [EquispacedLinear::precompute] can be reused
//! for several arrays at the same point. Outside the grid every array is clamped to its boundary
//! sample, or replaced by a configured null value.
//!
//! Derivative samples can be estimated from function values with a [DerivativeEstimator],
//! by default [CubicSplineDerivative].
//!
//! # Example
//! ```
//! use equispaced_linear::{EquispacedLinear, Sample};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut interpolant = EquispacedLinear::new(101, 0.0, 1.0, None).unwrap();
//! interpolant.tabulate(|x| 2.0 * x + 1.0);
//! interpolant.initialize_derivatives(None).unwrap();
//!
//! let bracket = interpolant.precompute(0.123);
//! assert_approx_eq!(1.246, interpolant.value(0.123, Some(bracket)), 1e-12);
//! assert_approx_eq!(2.0, interpolant.first_derivative(0.123, Some(bracket)), 1e-9);
//! assert_approx_eq!(3.0, interpolant.value(1.5, None), 1e-12);
//! ```

mod derivative;
mod error;
mod grid;
mod interpolant;

pub use derivative::{CentralDifference, CubicSplineDerivative, DerivativeEstimator};
pub use error::InterpolantError;
pub use grid::{Bracket, UniformGrid};
pub use interpolant::{EquispacedLinear, Sample};
