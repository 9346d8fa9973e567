//! Inversion of the x axis: find `t` such that `x(t) = x`.
//!
//! Bezier curves have no closed form for t as a function of x, so every
//! evaluation runs a small bounded root find:
//!
//! 1. bracket x in the [`SampleTable`] and interpolate a first guess;
//! 2. if the slope at the guess is at least [`NEWTON_MIN_SLOPE`], run
//!    [`NEWTON_ITERATIONS`] Newton-Raphson steps;
//! 3. if the slope is exactly zero, return the guess as is;
//! 4. otherwise bisect the bracketed interval.
//!
//! Every path runs a fixed maximum number of iterations, so a solve never
//! loops indefinitely, whatever the input.

use crate::polynomial::AxisPolynomial;
use crate::sample_table::{Bracket, SampleTable};

/// Newton-Raphson steps taken from the interpolated guess.
pub const NEWTON_ITERATIONS: usize = 4;

/// Smallest initial slope for which Newton-Raphson is trusted.
pub const NEWTON_MIN_SLOPE: f64 = 0.001;

/// Bisection stops once `|x(t) - x|` is at most this.
pub const SUBDIVISION_PRECISION: f64 = 0.000_000_1;

/// Upper bound on bisection steps.
pub const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// Which branch of the solver produced a root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootMethod {
    /// Refined from the guess with Newton-Raphson.
    NewtonRaphson,
    /// The slope at the guess was exactly zero; the guess was returned.
    InitialGuess,
    /// The slope was too shallow for Newton-Raphson; the bracket was bisected.
    Bisection,
}

/// A recovered curve parameter and how it was found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    /// Curve parameter whose x coordinate approximates the target.
    pub t: f64,
    /// Solver branch that produced `t`.
    pub method: RootMethod,
}

/// Root finder for the x axis of one curve.
///
/// Holds the x polynomial and its sample table; both are immutable after
/// construction, so a solver can be shared freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSolver {
    x: AxisPolynomial,
    samples: SampleTable,
}

impl CurveSolver {
    /// Build a solver for interior x coordinates `x1` and `x2`.
    ///
    /// The coordinates are expected to be in `[0,1]`; callers validate them.
    pub fn new(x1: f64, x2: f64) -> Self {
        let x = AxisPolynomial::new(x1, x2);
        let samples = SampleTable::new(&x);
        Self { x, samples }
    }

    /// Find the parameter `t` with `x(t) ≈ target`.
    #[inline]
    pub fn t_for_x(&self, target: f64) -> f64 {
        self.solve(target).t
    }

    /// Find the parameter for `target`, reporting which branch was taken.
    pub fn solve(&self, target: f64) -> Root {
        let bracket = self.samples.bracket(target);
        let initial_slope = self.x.slope(bracket.guess);

        if initial_slope >= NEWTON_MIN_SLOPE {
            Root {
                t: self.newton_raphson(target, bracket.guess),
                method: RootMethod::NewtonRaphson,
            }
        } else if initial_slope == 0.0 {
            Root {
                t: bracket.guess,
                method: RootMethod::InitialGuess,
            }
        } else {
            Root {
                t: self.bisect(target, &bracket),
                method: RootMethod::Bisection,
            }
        }
    }

    /// Fixed-count Newton-Raphson from `guess`. Bails out with the current
    /// estimate if it lands on a point of zero slope.
    fn newton_raphson(&self, target: f64, guess: f64) -> f64 {
        let mut t = guess;

        for _ in 0..NEWTON_ITERATIONS {
            let slope = self.x.slope(t);
            if slope == 0.0 {
                return t;
            }
            let residual = self.x.value(t) - target;
            t -= residual / slope;
        }

        t
    }

    /// Bisection inside the bracketed interval.
    ///
    /// A positive residual moves the upper bound down, anything else (zero
    /// and NaN included) moves the lower bound up. At least one midpoint is
    /// always evaluated.
    fn bisect(&self, target: f64, bracket: &Bracket) -> f64 {
        let mut low = bracket.start();
        let mut high = bracket.end();
        let mut iterations = 0;

        loop {
            let t = low + (high - low) / 2.0;
            let residual = self.x.value(t) - target;

            if residual > 0.0 {
                high = t;
            } else {
                low = t;
            }

            iterations += 1;
            if !(residual.abs() > SUBDIVISION_PRECISION && iterations < SUBDIVISION_MAX_ITERATIONS)
            {
                return t;
            }
        }
    }

    /// The x-axis sample table.
    pub fn samples(&self) -> &SampleTable {
        &self.samples
    }

    /// The x-axis polynomial.
    pub fn x_axis(&self) -> &AxisPolynomial {
        &self.x
    }
}
