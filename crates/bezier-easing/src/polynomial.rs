//! Power-basis form of one axis of a unit cubic Bezier curve.

/// One coordinate of a cubic Bezier whose endpoints are pinned at 0 and 1.
///
/// With P0 = 0 and P3 = 1 the Bernstein form collapses to
/// `B(t) = ((a*t + b)*t + c)*t` where
///
/// - `a = 1 - 3*p2 + 3*p1`
/// - `b = 3*p2 - 6*p1`
/// - `c = 3*p1`
///
/// and `p1`, `p2` are the interior control coordinates on this axis. The
/// same type serves both axes: the solver inverts the x axis and the
/// evaluator reads the y axis at the recovered parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPolynomial {
    a: f64,
    b: f64,
    c: f64,
}

impl AxisPolynomial {
    /// Build the polynomial for interior control coordinates `p1` and `p2`.
    #[inline]
    pub fn new(p1: f64, p2: f64) -> Self {
        Self {
            a: 1.0 - 3.0 * p2 + 3.0 * p1,
            b: 3.0 * p2 - 6.0 * p1,
            c: 3.0 * p1,
        }
    }

    /// Coordinate of the curve at parameter `t` (Horner form).
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    /// Derivative `dB/dt` at parameter `t`.
    #[inline]
    pub fn slope(&self, t: f64) -> f64 {
        3.0 * self.a * t * t + 2.0 * self.b * t + self.c
    }
}
