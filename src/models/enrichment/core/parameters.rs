//! Validated inputs for one enrichment calculation.

use log::debug;
use uom::si::{f64::Mass, mass::kilogram};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    isotope::{Assay, SeparationFactor},
};

use super::{SeparationError, SeparativeWork, StageCount, feed_mass, separative_work};

/// Inputs of a single enrichment: product mass, three assays, and the
/// per-stage separation factor.
///
/// Construction guarantees `tails < feed < product` on the assays, so every
/// derived quantity is finite apart from the stage count, which is infinite
/// when the separation factor is exactly one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationParameters {
    product: Constrained<Mass, StrictlyPositive>,
    product_assay: Assay,
    feed_assay: Assay,
    tails_assay: Assay,
    separation_factor: SeparationFactor,
}

impl SeparationParameters {
    /// Creates parameters from typed quantities.
    ///
    /// # Errors
    ///
    /// Returns [`SeparationError::Invalid`] if the product mass is not
    /// strictly positive, and [`SeparationError::Ordering`] unless
    /// `tails < feed < product`.
    pub fn new(
        product: Mass,
        product_assay: Assay,
        feed_assay: Assay,
        tails_assay: Assay,
        separation_factor: SeparationFactor,
    ) -> Result<Self, SeparationError> {
        let product =
            StrictlyPositive::new(product).map_err(SeparationError::invalid("product mass"))?;

        if !(tails_assay < feed_assay && feed_assay < product_assay) {
            return Err(SeparationError::Ordering {
                tails: tails_assay.fraction(),
                feed: feed_assay.fraction(),
                product: product_assay.fraction(),
            });
        }

        Ok(Self {
            product,
            product_assay,
            feed_assay,
            tails_assay,
            separation_factor,
        })
    }

    /// Creates parameters from plain numbers: product mass in kilograms,
    /// assays as fractions, and the separation factor.
    ///
    /// # Errors
    ///
    /// Returns [`SeparationError::Invalid`] naming the first input that
    /// violates its range, or [`SeparationError::Ordering`] for misordered assays.
    pub fn from_fractions(
        product_kg: f64,
        x_p: f64,
        x_f: f64,
        x_t: f64,
        alpha: f64,
    ) -> Result<Self, SeparationError> {
        Self::new(
            Mass::new::<kilogram>(product_kg),
            Assay::new(x_p).map_err(SeparationError::invalid("product assay"))?,
            Assay::new(x_f).map_err(SeparationError::invalid("feed assay"))?,
            Assay::new(x_t).map_err(SeparationError::invalid("tails assay"))?,
            SeparationFactor::new(alpha)
                .map_err(SeparationError::invalid("separation factor"))?,
        )
    }

    /// Product mass.
    #[must_use]
    pub fn product(&self) -> Mass {
        *self.product.as_ref()
    }

    /// Product assay `x_p`.
    #[must_use]
    pub fn product_assay(&self) -> Assay {
        self.product_assay
    }

    /// Feed assay `x_f`.
    #[must_use]
    pub fn feed_assay(&self) -> Assay {
        self.feed_assay
    }

    /// Tails assay `x_t`.
    #[must_use]
    pub fn tails_assay(&self) -> Assay {
        self.tails_assay
    }

    /// Per-stage separation factor α.
    #[must_use]
    pub fn separation_factor(&self) -> SeparationFactor {
        self.separation_factor
    }

    /// Feed mass, tails mass, and separative work of this enrichment.
    #[must_use]
    pub fn separative_work(&self) -> SeparativeWork {
        let product = self.product().get::<kilogram>();
        let (x_p, x_f, x_t) = self.fractions();

        let feed = feed_mass(product, x_p, x_f, x_t);
        let swu = separative_work(product, x_p, x_f, x_t);
        debug!("separative work: feed={feed:.3} kg, swu={swu:.3} kg-SWU");

        SeparativeWork {
            feed: Mass::new::<kilogram>(feed),
            tails: Mass::new::<kilogram>(feed - product),
            swu: Mass::new::<kilogram>(swu),
        }
    }

    /// Ideal-cascade stage count for these assays and separation factor.
    #[must_use]
    pub fn stages(&self) -> StageCount {
        let (x_p, x_f, x_t) = self.fractions();
        let stages = StageCount::estimate(self.separation_factor.value(), x_f, x_p, Some(x_t));
        debug!(
            "stages: enriching={:.2}, stripping={:.2}",
            stages.enriching, stages.stripping
        );
        stages
    }

    fn fractions(&self) -> (f64, f64, f64) {
        (
            self.product_assay.fraction(),
            self.feed_assay.fraction(),
            self.tails_assay.fraction(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn centrifuge_scenario() -> Result<(), SeparationError> {
        let params = SeparationParameters::from_fractions(1000.0, 0.045, 0.00711, 0.0025, 1.4)?;
        let work = params.separative_work();

        assert_relative_eq!(work.feed.get::<kilogram>(), 9219.09, epsilon = 0.01);
        assert_relative_eq!(
            work.tails.get::<kilogram>(),
            work.feed.get::<kilogram>() - 1000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(work.swu.get::<kilogram>(), -4496.331, epsilon = 1e-3);

        let stages = params.stages();
        assert!(stages.is_finite());
        assert_relative_eq!(stages.total(), 8.590, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn unit_separation_factor_gives_infinite_stages() -> Result<(), SeparationError> {
        let params = SeparationParameters::from_fractions(1000.0, 0.045, 0.00711, 0.0025, 1.0)?;
        assert_eq!(params.stages().total(), f64::INFINITY);
        assert!(params.separative_work().feed.get::<kilogram>().is_finite());
        Ok(())
    }

    #[test]
    fn rejects_misordered_assays() {
        // Target below natural lithium.
        let err = SeparationParameters::from_fractions(1000.0, 0.01, 0.075, 0.0075, 1.05)
            .unwrap_err();
        assert!(matches!(err, SeparationError::Ordering { .. }));

        // Tails equal to feed.
        let err = SeparationParameters::from_fractions(1000.0, 0.045, 0.00711, 0.00711, 1.4)
            .unwrap_err();
        assert!(matches!(err, SeparationError::Ordering { .. }));
    }

    #[test]
    fn names_the_invalid_input() {
        assert_eq!(
            SeparationParameters::from_fractions(0.0, 0.045, 0.00711, 0.0025, 1.4),
            Err(SeparationError::Invalid {
                quantity: "product mass",
                source: ConstraintError::Zero,
            })
        );
        assert_eq!(
            SeparationParameters::from_fractions(1000.0, 0.045, 0.00711, 0.0025, 0.5),
            Err(SeparationError::Invalid {
                quantity: "separation factor",
                source: ConstraintError::BelowMinimum,
            })
        );
        assert!(matches!(
            SeparationParameters::from_fractions(1000.0, 1.2, 0.00711, 0.0025, 1.4),
            Err(SeparationError::Invalid {
                quantity: "product assay",
                ..
            })
        ));
    }

    #[test]
    fn error_messages() {
        let err = SeparationParameters::from_fractions(-1.0, 0.045, 0.00711, 0.0025, 1.4)
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid product mass: value must not be negative");
    }
}
