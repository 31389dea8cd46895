//! The separative-work value function.

/// Smallest fraction passed to the logarithm.
pub const MIN_FRACTION: f64 = 1e-10;

/// Largest fraction passed to the logarithm.
pub const MAX_FRACTION: f64 = 0.999_999_99;

/// Evaluates the value function `V(x) = (2x − 1) · ln(x / (1 − x))`.
///
/// The fraction is clamped to `[MIN_FRACTION, MAX_FRACTION]` first, so the
/// result is finite for every finite input, including the endpoints 0 and 1.
/// A `NaN` input yields `NaN`.
///
/// # Example
///
/// ```
/// use isotope_separation::models::enrichment::value_function;
///
/// assert_eq!(value_function(0.5), 0.0);
/// assert!(value_function(0.0).is_finite());
/// ```
#[must_use]
pub fn value_function(x: f64) -> f64 {
    let x = x.clamp(MIN_FRACTION, MAX_FRACTION);
    (2.0 * x - 1.0) * (x / (1.0 - x)).ln()
}
