//! Precomputed x samples used to bracket the solver's starting point.

use crate::polynomial::AxisPolynomial;

/// Number of entries in the sample table.
pub const SAMPLE_TABLE_SIZE: usize = 11;

/// Parameter distance between consecutive samples.
pub const SAMPLE_STEP: f64 = 1.0 / (SAMPLE_TABLE_SIZE as f64 - 1.0);

/// Sub-interval of the parameter range that contains the solution for some x,
/// plus a linearly interpolated first guess inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    /// Index of the left sample of the interval.
    pub interval: usize,
    /// Linear-interpolation estimate of t.
    pub guess: f64,
}

impl Bracket {
    /// Parameter value at the left edge of the interval.
    #[inline]
    pub fn start(&self) -> f64 {
        self.interval as f64 * SAMPLE_STEP
    }

    /// Parameter value at the right edge of the interval.
    #[inline]
    pub fn end(&self) -> f64 {
        (self.interval + 1) as f64 * SAMPLE_STEP
    }
}

/// The curve's x coordinate sampled at `t = 0, 0.1, ..., 1`.
///
/// Built once per curve and only read afterwards. Valid curves have a
/// non-decreasing x axis, so the table is sorted and a linear scan is enough
/// to find the interval holding any target x.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleTable {
    values: [f64; SAMPLE_TABLE_SIZE],
}

impl SampleTable {
    /// Sample `axis` at every table step.
    pub fn new(axis: &AxisPolynomial) -> Self {
        let mut values = [0.0f64; SAMPLE_TABLE_SIZE];

        for (i, entry) in values.iter_mut().enumerate() {
            *entry = axis.value(i as f64 * SAMPLE_STEP);
        }

        Self { values }
    }

    /// Locate the interval containing `x` and interpolate a starting guess.
    ///
    /// The scan starts at index 1 and advances while the sample is `<= x`,
    /// so ties resolve to the last interval whose left sample does not
    /// exceed `x`. It never walks past the final interval.
    #[inline]
    pub fn bracket(&self, x: f64) -> Bracket {
        let interval = self
            .values
            .iter()
            .skip(1)
            .take(SAMPLE_TABLE_SIZE - 2)
            .take_while(|&&sample| sample <= x)
            .count();

        let low = self.values[interval];
        let high = self.values[interval + 1];
        let dist = (x - low) / (high - low);
        let guess = interval as f64 * SAMPLE_STEP + dist * SAMPLE_STEP;

        Bracket { interval, guess }
    }

    /// Raw sample values, for inspection.
    pub fn values(&self) -> &[f64; SAMPLE_TABLE_SIZE] {
        &self.values
    }
}
