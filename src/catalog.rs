//! Worked isotope separation examples.
//!
//! The catalog is a static, read-only table. Each [`Example`] names an
//! isotope pair, the compound it is processed as, its natural feed assay,
//! and the separation [`Method`] that fixes or suggests a separation factor.

/// Separation technology behind an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Gas centrifuge cascade with a user-adjustable separation factor.
    Centrifuge,

    /// Gaseous diffusion through porous barriers.
    Diffusion,

    /// Chemical exchange between two phases.
    Chemical,

    /// Illustrative only: the real process is not gaseous.
    Note,
}

/// How the separation factor is chosen for a [`Method`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeparationRegime {
    /// The user picks a factor within `[min, max]`.
    Adjustable { min: f64, max: f64, default: f64 },

    /// The factor is fixed and shown with an explanatory note.
    Fixed { value: f64, info: &'static str },
}

impl Method {
    /// The separation-factor regime for this method.
    #[must_use]
    pub fn regime(self) -> SeparationRegime {
        match self {
            Self::Centrifuge => SeparationRegime::Adjustable {
                min: 1.01,
                max: 2.0,
                default: 1.4,
            },
            Self::Diffusion => SeparationRegime::Fixed {
                value: 1.0043,
                info: "Gaseous Diffusion α ≈ 1.0043 (fixed for UF6)",
            },
            Self::Chemical => SeparationRegime::Fixed {
                value: 2.0,
                info: "Girdler-Sulfide: α ≈ 2.33 (cold) / 1.82 (hot)",
            },
            Self::Note => SeparationRegime::Fixed {
                value: 1.05,
                info: "Lithium-6 primarily via chemical exchange (historical COLEX, α ≈ 1.05). Not gaseous.",
            },
        }
    }

    /// Short qualitative label printed next to a stage count.
    #[must_use]
    pub fn stage_label(self) -> &'static str {
        match self {
            Self::Centrifuge => "(centrifuge)",
            Self::Diffusion => "(diffusion – very high!)",
            Self::Chemical => "(chemical exchange towers)",
            Self::Note => "(illustrative only)",
        }
    }
}

/// A named separation scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example {
    pub name: &'static str,

    /// Mass number of the isotope being enriched.
    pub light_mass: u32,

    /// Mass number of the other isotope.
    pub heavy_mass: u32,

    /// Compound or process the isotopes are handled in.
    pub compound: &'static str,

    /// Mass added by the carrier compound (e.g. six fluorines in UF6).
    pub additive_mass: Option<u32>,

    /// Natural abundance of the light isotope, as a fraction.
    pub feed_fraction: f64,

    pub method: Method,

    /// Literature separation factor for the process, when one is quoted.
    pub reference_alpha: Option<f64>,
}

impl Example {
    /// Whether this is one of the uranium examples.
    #[must_use]
    pub fn is_uranium(&self) -> bool {
        self.light_mass == 235
    }

    /// Suggested product assay, in percent.
    #[must_use]
    pub fn default_target_percent(&self) -> f64 {
        if self.is_uranium() { 4.5 } else { 30.0 }
    }

    /// Suggested tails assay, in percent.
    ///
    /// Uranium uses the usual 0.25 %; other examples strip to a tenth of
    /// the feed assay.
    #[must_use]
    pub fn default_tails_percent(&self) -> f64 {
        if self.is_uranium() {
            0.25
        } else {
            self.feed_fraction * 10.0
        }
    }

    /// Smallest tails assay the shell offers, in percent.
    ///
    /// This is [`MIN_TAILS_PERCENT`] unless the default tails assay sits
    /// below it, as it does for deuterium.
    #[must_use]
    pub fn min_tails_percent(&self) -> f64 {
        MIN_TAILS_PERCENT.min(self.default_tails_percent())
    }

    /// Largest tails assay the shell offers, in percent.
    ///
    /// Tails must stay strictly below the feed assay, so the bound sits at
    /// [`MAX_TAILS_SHARE`] of it.
    #[must_use]
    pub fn max_tails_percent(&self) -> f64 {
        self.feed_fraction * 100.0 * MAX_TAILS_SHARE
    }

    /// Molecular masses of the light and heavy species in the carrier compound.
    #[must_use]
    pub fn molecular_masses(&self) -> (u32, u32) {
        let additive = self.additive_mass.unwrap_or(0);
        (self.light_mass + additive, self.heavy_mass + additive)
    }
}

/// Usual lower bound on the tails assay, in percent.
pub const MIN_TAILS_PERCENT: f64 = 0.01;

/// Largest tails assay as a share of the feed assay.
pub const MAX_TAILS_SHARE: f64 = 0.99;

static EXAMPLES: [Example; 4] = [
    Example {
        name: "Uranium (U-235/238) - Centrifuge",
        light_mass: 235,
        heavy_mass: 238,
        compound: "UF6",
        additive_mass: Some(6 * 19),
        feed_fraction: 0.00711,
        method: Method::Centrifuge,
        reference_alpha: None,
    },
    Example {
        name: "Uranium (U-235/238) - Gaseous Diffusion",
        light_mass: 235,
        heavy_mass: 238,
        compound: "UF6",
        additive_mass: Some(6 * 19),
        feed_fraction: 0.00711,
        method: Method::Diffusion,
        reference_alpha: None,
    },
    Example {
        name: "Deuterium (Heavy Water Historical)",
        light_mass: 2,
        heavy_mass: 1,
        compound: "H2S exchange",
        additive_mass: None,
        feed_fraction: 0.00015,
        method: Method::Chemical,
        reference_alpha: Some(2.33),
    },
    Example {
        name: "Lithium-6/7 (Fusion Fuel Example)",
        light_mass: 6,
        heavy_mass: 7,
        compound: "Note: Primarily chemical (COLEX)",
        additive_mass: None,
        feed_fraction: 0.075,
        method: Method::Note,
        reference_alpha: None,
    },
];

/// All examples, in display order.
#[must_use]
pub fn examples() -> &'static [Example] {
    &EXAMPLES
}

/// Looks up an example by its exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.name == name)
}
