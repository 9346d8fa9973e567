//! Error types for easing construction.

/// Error type for easing construction and parsing.
///
/// Evaluation never fails: once an [`Easing`](crate::Easing) exists, every
/// input produces a number. Errors only surface while building one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EasingError {
    /// An interior control point's x coordinate lies outside `[0,1]`.
    ///
    /// Only x coordinates are constrained. The y coordinates may leave the
    /// unit range to produce overshoot ("back") curves.
    #[error("control point {point} x coordinate {value} is outside valid range [0,1]")]
    InvalidControlPoint {
        /// Which interior control point failed (1 or 2).
        point: usize,
        /// The rejected x coordinate.
        value: f64,
    },

    /// Text could not be parsed as a CSS timing function.
    #[error("invalid timing function: {0}")]
    InvalidTimingFunction(String),
}
