use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value is one or greater: `x ≥ 1`.
///
/// Separation factors use this constraint. A factor of exactly one is
/// allowed and describes a stage that performs no separation.
///
/// # Examples
///
/// ```
/// use isotope_separation::support::constraint::AtLeastOne;
///
/// assert!(AtLeastOne::new(1.4).is_ok());
/// assert!(AtLeastOne::new(1.0).is_ok());
/// assert!(AtLeastOne::new(0.99).is_err());
/// assert!(AtLeastOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs `Constrained<T, AtLeastOne>` if value ≥ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::<T, AtLeastOne>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn floats() {
        assert!(AtLeastOne::new(2.0).is_ok());
        assert!(AtLeastOne::new(f64::INFINITY).is_ok());
        assert_eq!(AtLeastOne::new(0.5), Err(ConstraintError::BelowMinimum));
        assert_eq!(AtLeastOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn ratios() {
        assert!(AtLeastOne::new(Ratio::new::<ratio>(1.0043)).is_ok());
        assert!(AtLeastOne::new(Ratio::new::<ratio>(0.0)).is_err());
    }
}
