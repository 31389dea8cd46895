//! Feed mass and separative work for a single enrichment.

use uom::si::f64::Mass;

use super::value_function;

/// Feed mass required to deliver `product` at assay `x_p` from feed at `x_f`
/// while discarding tails at `x_t`.
///
/// Computes `P · (x_p − x_t) / (x_f − x_t)`. No ordering checks are made:
/// callers wanting validated inputs go through
/// [`SeparationParameters`](super::SeparationParameters).
#[must_use]
pub fn feed_mass(product: f64, x_p: f64, x_f: f64, x_t: f64) -> f64 {
    product * (x_p - x_t) / (x_f - x_t)
}

/// Separative work units needed for an enrichment, in units of `product`.
///
/// Computes
/// `P · [V(x_p) − ((x_p − x_t)/(x_p − x_f)) · V(x_t) − ((x_f − x_t)/(x_p − x_f)) · V(x_f)]`
/// where `V` is the [`value_function`].
///
/// As with [`feed_mass`], the assay ordering `x_t < x_f < x_p` is the
/// caller's responsibility. Equal product and feed assays divide by zero and
/// produce a non-finite result.
#[must_use]
pub fn separative_work(product: f64, x_p: f64, x_f: f64, x_t: f64) -> f64 {
    let spread = x_p - x_f;
    product
        * (value_function(x_p)
            - ((x_p - x_t) / spread) * value_function(x_t)
            - ((x_f - x_t) / spread) * value_function(x_f))
}

/// Mass balance and separative work of an enrichment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparativeWork {
    /// Feed mass consumed.
    pub feed: Mass,

    /// Depleted tails mass discarded, `feed − product`.
    pub tails: Mass,

    /// Separative work, expressed in mass units (kg-SWU).
    pub swu: Mass,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn low_enriched_uranium_feed() {
        let feed = feed_mass(1000.0, 0.045, 0.00711, 0.0025);
        assert_relative_eq!(feed, 1000.0 * 0.0425 / 0.00461, max_relative = 1e-12);
        assert!((9150.0..9250.0).contains(&feed));
    }

    #[test]
    fn work_scales_with_product() {
        let one = separative_work(1.0, 0.045, 0.00711, 0.0025);
        let thousand = separative_work(1000.0, 0.045, 0.00711, 0.0025);
        assert!(one.is_finite());
        assert_relative_eq!(thousand, 1000.0 * one, max_relative = 1e-12);
    }

    #[test]
    fn low_enriched_uranium_work() {
        // This form of the expression goes negative for typical LEU assays.
        let swu = separative_work(1000.0, 0.045, 0.00711, 0.0025);
        assert_relative_eq!(swu, -4496.331, epsilon = 1e-3);
    }

    #[test]
    fn lithium_work() {
        assert_relative_eq!(separative_work(10.0, 0.3, 0.075, 0.0075), -65.574, epsilon = 1e-3);
    }

    #[test]
    fn equal_product_and_feed_is_not_finite() {
        assert!(!separative_work(1000.0, 0.00711, 0.00711, 0.0025).is_finite());
    }

    proptest! {
        #[test]
        fn feed_exceeds_product(
            product in 1.0_f64..100_000.0,
            x_t in 0.0001_f64..0.3,
            feed_gap in 0.0001_f64..0.3,
            product_gap in 0.0001_f64..0.3,
        ) {
            let x_f = x_t + feed_gap;
            let x_p = x_f + product_gap;
            prop_assert!(feed_mass(product, x_p, x_f, x_t) > product);
        }
    }
}
