//! Schematic assay profile along a cascade.

use uom::si::ratio::percent;

use crate::support::isotope::Assay;

/// Limits on the number of points in an [`EnrichmentProfile`].
#[derive(Debug, Clone, Copy)]
pub struct ProfileConfig {
    /// Upper bound on the number of points, regardless of stage count.
    pub max_points: usize,

    /// Lower bound on the number of points.
    pub min_points: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            max_points: 200,
            min_points: 1,
        }
    }
}

impl ProfileConfig {
    /// Number of profile points for a cascade with `stages` stages.
    ///
    /// Finite stage counts are truncated and clamped to
    /// `[min_points, max_points]`. A non-finite count describes a cascade
    /// that cannot be built and collapses to `min_points`.
    #[must_use]
    pub fn points_for(&self, stages: f64) -> usize {
        if !stages.is_finite() {
            return self.min_points;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stages = stages.max(0.0).min(self.max_points as f64) as usize;
        stages.clamp(self.min_points, self.max_points.max(self.min_points))
    }
}

/// Log-spaced light-isotope assays from the tails end to the product end
/// of a cascade.
///
/// Point `i` of `n` sits at `x_t · (x_p / x_t)^(i / (n − 1))`, so the
/// profile is a straight line on a semilog plot. A single-point profile
/// holds only the tails assay.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentProfile {
    percents: Vec<f64>,
}

impl EnrichmentProfile {
    /// Builds the profile between `tails` and `product` for a cascade of
    /// `stages` stages.
    #[must_use]
    pub fn new(tails: Assay, product: Assay, stages: f64, config: &ProfileConfig) -> Self {
        let n = config.points_for(stages);
        let low = tails.get::<percent>();
        let high = product.get::<percent>();

        let percents = match n {
            0 => Vec::new(),
            1 => vec![low],
            _ => {
                let span = (high / low).ln();
                #[allow(clippy::cast_precision_loss)]
                let last = (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let t = i as f64 / last;
                        low * (span * t).exp()
                    })
                    .collect()
            }
        };

        Self { percents }
    }

    /// Light-isotope percentages, ordered from stage 0.
    #[must_use]
    pub fn percents(&self) -> &[f64] {
        &self.percents
    }

    /// `(stage number, light-isotope %)` pairs ready for plotting.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.percents.iter().copied().enumerate()
    }

    /// Number of points in the profile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.percents.len()
    }

    /// Whether the profile has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::support::constraint::ConstraintResult;

    fn profile(x_t: f64, x_p: f64, stages: f64) -> ConstraintResult<EnrichmentProfile> {
        Ok(EnrichmentProfile::new(
            Assay::new(x_t)?,
            Assay::new(x_p)?,
            stages,
            &ProfileConfig::default(),
        ))
    }

    #[test]
    fn point_count_follows_stages() {
        let config = ProfileConfig::default();
        assert_eq!(config.points_for(8.59), 8);
        assert_eq!(config.points_for(673.6), 200);
        assert_eq!(config.points_for(0.4), 1);
        assert_eq!(config.points_for(f64::INFINITY), 1);
        assert_eq!(config.points_for(f64::NAN), 1);
    }

    #[test]
    fn spans_tails_to_product() -> ConstraintResult<()> {
        for stages in [8.59, 14.3, 75.6, 673.6] {
            let profile = profile(0.0025, 0.045, stages)?;
            let percents = profile.percents();

            assert!(profile.len() >= 2);
            assert_relative_eq!(percents[0], 0.25, max_relative = 1e-12);
            assert_relative_eq!(percents[profile.len() - 1], 4.5, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn log_spacing_has_constant_ratio() -> ConstraintResult<()> {
        let profile = profile(0.0075, 0.3, 75.6)?;
        let percents = profile.percents();
        let ratio = percents[1] / percents[0];

        for pair in percents.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], ratio, max_relative = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn impossible_cascade_degenerates_to_tails() -> ConstraintResult<()> {
        let profile = profile(0.0025, 0.045, f64::INFINITY)?;
        assert_eq!(profile.len(), 1);
        assert_relative_eq!(profile.percents()[0], 0.25, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn points_are_numbered_from_zero() -> ConstraintResult<()> {
        let profile = profile(0.0025, 0.045, 3.0)?;
        let stages: Vec<usize> = profile.points().map(|(stage, _)| stage).collect();
        assert_eq!(stages, vec![0, 1, 2]);
        Ok(())
    }
}
