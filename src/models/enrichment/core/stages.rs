//! Ideal-cascade stage estimates.

/// Stage count of an ideal cascade, split into its two sections.
///
/// The enriching section raises the feed assay to the product assay and the
/// stripping section lowers it to the tails assay. Both sections are
/// `f64::INFINITY` when the separation factor does not exceed one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageCount {
    /// Stages above the feed point, `ln(x_p / x_f) / ln(α)`.
    pub enriching: f64,

    /// Stages below the feed point, `ln(x_f / x_t) / ln(α)`.
    pub stripping: f64,
}

impl StageCount {
    /// Estimates the stages of an ideal cascade.
    ///
    /// When `x_t` is `None` the tails assay defaults to a tenth of the feed
    /// assay. A separation factor of one or less yields infinite sections.
    #[must_use]
    pub fn estimate(alpha: f64, x_f: f64, x_p: f64, x_t: Option<f64>) -> Self {
        if alpha <= 1.0 {
            return Self {
                enriching: f64::INFINITY,
                stripping: f64::INFINITY,
            };
        }

        let x_t = x_t.unwrap_or(x_f / 10.0);
        let ln_alpha = alpha.ln();

        Self {
            enriching: (x_p / x_f).ln() / ln_alpha,
            stripping: (x_f / x_t).ln() / ln_alpha,
        }
    }

    /// Total stages in the cascade.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.enriching + self.stripping
    }

    /// Whether the cascade can be built at all.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.total().is_finite()
    }
}

/// Approximate total stage count of an ideal cascade.
///
/// Returns `f64::INFINITY` when `alpha ≤ 1`. See [`StageCount::estimate`].
///
/// # Example
///
/// ```
/// use isotope_separation::models::enrichment::ideal_stages;
///
/// assert_eq!(ideal_stages(1.0, 0.00711, 0.045, None), f64::INFINITY);
/// assert!(ideal_stages(1.4, 0.00711, 0.045, Some(0.0025)) < 10.0);
/// ```
#[must_use]
pub fn ideal_stages(alpha: f64, x_f: f64, x_p: f64, x_t: Option<f64>) -> f64 {
    StageCount::estimate(alpha, x_f, x_p, x_t).total()
}
