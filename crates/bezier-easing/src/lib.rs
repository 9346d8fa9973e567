//! CSS `cubic-bezier()` easing functions.
//!
//! A timing function maps input progress `x` in `[0,1]` to output progress
//! along a cubic Bezier pinned at (0,0) and (1,1). The curve is parametric,
//! so each evaluation first inverts x(t), then reads y(t).
//!
//! # Overview
//!
//! - [`bezier`] / [`Easing::from_points`]: validate control points and build
//!   an evaluator. Points on the diagonal collapse to [`Easing::Linear`].
//! - [`Easing::evaluate`]: the hot path. Bounded work, no allocation, never
//!   fails, no logging.
//! - [`Preset`] and `str::parse`: the CSS keywords and `cubic-bezier(...)`.
//! - [`EasingConfig`]: serde forms accepted in configuration files.
//! - [`EasingLut`]: a baked 256-entry table for interpolated lookups.
//!
//! # Solver
//!
//! Each curve samples x(t) at eleven evenly spaced parameters when it is
//! built. Evaluation brackets x in that table, interpolates a first guess and
//! then either runs four Newton-Raphson steps, keeps the guess (zero slope),
//! or bisects the bracket (shallow slope). See [`solver`] for details.
//!
//! # Example
//!
//! ```
//! use bezier_easing::bezier;
//!
//! let ease = bezier(0.25, 0.1, 0.25, 1.0)?;
//!
//! assert_eq!(ease.evaluate(0.0), 0.0);
//! assert_eq!(ease.evaluate(1.0), 1.0);
//! assert!(ease.evaluate(0.5) > 0.5);
//!
//! // Only the x coordinates are constrained.
//! assert!(bezier(1.2, 0.0, 0.5, 1.0).is_err());
//! assert!(bezier(0.68, -0.55, 0.265, 1.55).is_ok());
//! # Ok::<(), bezier_easing::EasingError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod css;
pub mod easing;
pub mod error;
pub mod lut;
pub mod polynomial;
pub mod prelude;
pub mod preset;
pub mod sample_table;
pub mod solver;

pub use config::EasingConfig;
pub use easing::{ControlPoints, CubicBezier, Easing};
pub use error::EasingError;
pub use lut::EasingLut;
pub use preset::Preset;
pub use solver::{Root, RootMethod};

/// Build an easing from the two interior control points `(x1, y1)` and
/// `(x2, y2)`.
///
/// # Errors
///
/// Returns [`EasingError::InvalidControlPoint`] if `x1` or `x2` is outside
/// `[0,1]`. The y coordinates are unconstrained.
pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Easing, EasingError> {
    Easing::from_points(ControlPoints::new(x1, y1, x2, y2))
}
