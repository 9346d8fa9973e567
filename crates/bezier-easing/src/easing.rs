//! Easing values: validated control points and their evaluators.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::EasingConfig;
use crate::error::EasingError;
use crate::lut::EasingLut;
use crate::polynomial::AxisPolynomial;
use crate::solver::{CurveSolver, Root};

/// The two interior control points of a unit cubic Bezier.
///
/// The curve always runs from (0,0) to (1,1); `(x1, y1)` and `(x2, y2)` shape
/// it in between. Only the x coordinates are constrained to `[0,1]`, which
/// keeps x(t) monotonic and therefore invertible. The y coordinates are free
/// so that curves can overshoot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ControlPoints {
    /// x coordinate of the first control point.
    pub x1: f64,
    /// y coordinate of the first control point.
    pub y1: f64,
    /// x coordinate of the second control point.
    pub x2: f64,
    /// y coordinate of the second control point.
    pub y2: f64,
}

impl ControlPoints {
    /// Control points of the identity line.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Construct control points without validating them.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Check that both x coordinates lie in `[0,1]`.
    ///
    /// NaN and infinities are rejected. The y coordinates are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::InvalidControlPoint`] naming the first point
    /// whose x coordinate is out of range.
    pub fn validate(&self) -> Result<(), EasingError> {
        for (point, value) in [(1, self.x1), (2, self.x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EasingError::InvalidControlPoint { point, value });
            }
        }
        Ok(())
    }

    /// Whether both control points sit on the diagonal, making the curve
    /// the line y = x.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }
}

impl std::fmt::Display for ControlPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Evaluator for a cubic Bezier timing function.
///
/// Built once, evaluated many times. Construction samples the x axis into a
/// small table; each evaluation inverts x(t) with a bounded hybrid root find
/// and reads y at the result. Evaluation allocates nothing and never fails.
///
/// # Example
///
/// ```
/// use bezier_easing::{ControlPoints, CubicBezier};
///
/// let ease = CubicBezier::new(ControlPoints::new(0.25, 0.1, 0.25, 1.0))?;
/// let y = ease.evaluate(0.5);
/// assert!((y - 0.8024).abs() < 1e-3);
/// # Ok::<(), bezier_easing::EasingError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CubicBezier {
    points: ControlPoints,
    solver: CurveSolver,
    y: AxisPolynomial,
}

impl CubicBezier {
    /// Validate `points` and precompute the solver's sample table.
    ///
    /// Unlike [`Easing::from_points`], this always builds the full solver,
    /// even for control points on the identity line.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::InvalidControlPoint`] if `x1` or `x2` is
    /// outside `[0,1]`.
    pub fn new(points: ControlPoints) -> Result<Self, EasingError> {
        if let Err(err) = points.validate() {
            debug!(%points, error = %err, "rejected cubic-bezier control points");
            return Err(err);
        }

        debug!(%points, "built cubic-bezier easing");

        Ok(Self::from_valid_points(points))
    }

    /// Build without validation; `points` must already satisfy
    /// [`ControlPoints::validate`].
    pub(crate) fn from_valid_points(points: ControlPoints) -> Self {
        Self {
            points,
            solver: CurveSolver::new(points.x1, points.x2),
            y: AxisPolynomial::new(points.y1, points.y2),
        }
    }

    /// Map input progress `x` to output progress.
    ///
    /// `x` is clamped into `[0,1]`, and exactly 0 and 1 are returned
    /// unchanged so the endpoints never pick up round-off. NaN passes
    /// through. The result may leave `[0,1]` when a y control coordinate
    /// does.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.y.value(self.solver.t_for_x(x))
    }

    /// Curve parameter whose x coordinate matches `x`.
    #[inline]
    pub fn t_for_x(&self, x: f64) -> f64 {
        self.solver.t_for_x(x)
    }

    /// Like [`t_for_x`](Self::t_for_x), also reporting the solver branch.
    #[inline]
    pub fn solve(&self, x: f64) -> Root {
        self.solver.solve(x)
    }

    /// The validated control points.
    pub fn control_points(&self) -> ControlPoints {
        self.points
    }

    /// The x-axis solver.
    pub fn solver(&self) -> &CurveSolver {
        &self.solver
    }
}

/// An easing function produced by [`bezier`](crate::bezier).
///
/// Control points on the diagonal collapse to [`Easing::Linear`], which skips
/// the solver entirely. Everything else becomes an [`Easing::CubicBezier`].
///
/// # Example
///
/// ```
/// use bezier_easing::Easing;
///
/// let ease_out: Easing = "ease-out".parse()?;
/// assert!(ease_out.evaluate(0.5) > 0.5);
///
/// let f = ease_out.into_fn();
/// assert_eq!(f(1.0), 1.0);
/// # Ok::<(), bezier_easing::EasingError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "EasingConfig", try_from = "EasingConfig")]
pub enum Easing {
    /// Identity: y = x.
    #[default]
    Linear,
    /// A full cubic Bezier evaluator.
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Build an easing from control points.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::InvalidControlPoint`] if `x1` or `x2` is
    /// outside `[0,1]`.
    pub fn from_points(points: ControlPoints) -> Result<Self, EasingError> {
        points.validate()?;

        if points.is_identity() {
            trace!(%points, "control points lie on the diagonal, using linear easing");
            return Ok(Self::Linear);
        }

        CubicBezier::new(points).map(Self::CubicBezier)
    }

    /// Map input progress `x` to output progress.
    ///
    /// See [`CubicBezier::evaluate`] for the handling of inputs outside
    /// `[0,1]`. The linear easing clamps the same way.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Linear => {
                if x.is_nan() {
                    x
                } else {
                    x.clamp(0.0, 1.0)
                }
            }
            Self::CubicBezier(curve) => curve.evaluate(x),
        }
    }

    /// Turn the easing into a plain closure.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Clone + Send + Sync {
        move |x| self.evaluate(x)
    }

    /// Control points describing this easing. The linear easing reports
    /// [`ControlPoints::LINEAR`].
    pub fn control_points(&self) -> ControlPoints {
        match self {
            Self::Linear => ControlPoints::LINEAR,
            Self::CubicBezier(curve) => curve.control_points(),
        }
    }

    /// Bake into a lookup table.
    pub fn to_lut(&self) -> EasingLut {
        EasingLut::from_easing(self)
    }
}

impl TryFrom<ControlPoints> for Easing {
    type Error = EasingError;

    fn try_from(points: ControlPoints) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}
