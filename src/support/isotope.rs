//! Isotope quantities used by the enrichment models.
//!
//! Both types wrap a [`uom`] [`Ratio`] so callers can work in plain
//! fractions or in percent without manual conversions:
//!
//! ```
//! use isotope_separation::support::isotope::Assay;
//! use uom::si::ratio::percent;
//!
//! let natural = Assay::new(0.00711).unwrap();
//! assert!((natural.get::<percent>() - 0.711).abs() < 1e-12);
//!
//! let product = Assay::from_percent(4.5).unwrap();
//! assert!(natural < product);
//! ```

use std::ops::Deref;

use crate::support::constraint::{AtLeastOne, Constrained, ConstraintResult, UnitIntervalOpen};
use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

/// Fraction of the light isotope in a stream.
///
/// The assay must lie in the open interval (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Assay(Constrained<Ratio, UnitIntervalOpen>);

impl Assay {
    /// Create an [`Assay`] from a fraction.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the fraction lies outside the interval (0, 1).
    pub fn new(fraction: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(fraction))
    }

    /// Create an [`Assay`] from a percentage.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the percentage lies outside the interval (0, 100).
    pub fn from_percent(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<percent>(value))
    }

    /// Create an [`Assay`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval (0, 1).
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalOpen::new(quantity)?))
    }

    /// The assay as a plain fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.get::<ratio>()
    }
}

impl Deref for Assay {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Per-stage separation factor α of a separation method.
///
/// The factor must be at least one. A factor of exactly one separates
/// nothing, so any cascade built from such stages is infinitely long.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SeparationFactor(Constrained<Ratio, AtLeastOne>);

impl SeparationFactor {
    /// Create a [`SeparationFactor`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is below one or not a number.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(AtLeastOne::new(Ratio::new::<ratio>(value))?))
    }

    /// The factor as a plain number.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.get::<ratio>()
    }

    /// Whether a stage with this factor separates at all.
    #[must_use]
    pub fn separates(&self) -> bool {
        self.value() > 1.0
    }
}

impl Deref for SeparationFactor {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
