//! Binary isotope enrichment models.
//!
//! This module provides a [`twine_core::Model`] implementation for a single
//! enrichment calculation. The formulas themselves live in the internal
//! `core` module and are re-exported for direct use.

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    EnrichmentProfile, MAX_FRACTION, MIN_FRACTION, ProfileConfig, SeparationError,
    SeparationParameters, SeparativeWork, StageCount, feed_mass, ideal_stages, separative_work,
    value_function,
};

/// Everything derived from one set of [`SeparationParameters`].
///
/// Recomputed on every call; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Feed, tails, and separative work.
    pub work: SeparativeWork,

    /// Ideal-cascade stage count.
    pub stages: StageCount,

    /// Assay profile from the tails end to the product end.
    pub profile: EnrichmentProfile,
}

/// Computes separative work, stage count, and the enrichment profile.
///
/// # Example
///
/// ```
/// use isotope_separation::models::enrichment::{EnrichmentModel, SeparationParameters};
/// use twine_core::Model;
///
/// let params = SeparationParameters::from_fractions(1000.0, 0.045, 0.00711, 0.0025, 1.4).unwrap();
/// let calc = EnrichmentModel::default().call(&params).unwrap();
///
/// assert_eq!(calc.profile.len(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrichmentModel {
    /// Point limits for the enrichment profile.
    pub profile: ProfileConfig,
}

impl EnrichmentModel {
    /// Creates a model with the given profile limits.
    #[must_use]
    pub fn new(profile: ProfileConfig) -> Self {
        Self { profile }
    }
}

impl Model for EnrichmentModel {
    type Input = SeparationParameters;
    type Output = Calculation;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let work = input.separative_work();
        let stages = input.stages();
        let profile = EnrichmentProfile::new(
            input.tails_assay(),
            input.product_assay(),
            stages.total(),
            &self.profile,
        );

        Ok(Calculation {
            work,
            stages,
            profile,
        })
    }
}
