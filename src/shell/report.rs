//! Fixed texts and result formatting for the console.

use std::io::{self, Write};

use uom::si::{mass::kilogram, ratio::percent};

use crate::{
    catalog::{Example, Method},
    models::enrichment::{Calculation, SeparationParameters},
};

pub(crate) const TITLE: &str = "Isotope Separation Physics Demo (Educational)";

pub(crate) const DISCLAIMER: &str = "Educational/Theoretical Only | Demonstrates physics of \
     isotope separation methods. Highly simplified models.";

pub(crate) const HEADER: &str = "Generalized Binary Isotope Separation";

pub(crate) const DIFFUSION_WARNING: &str = "Gaseous diffusion needs ~4000+ stages vs. ~50–100 \
     for modern centrifuges – far less efficient!";

pub(crate) const NO_SEPARATION: &str = "a separation factor of 1 separates nothing, so no \
     cascade reaches the target.";

pub(crate) const LITHIUM_NOTE: &str = "Note on Lithium for Fusion: Li-6 enrichment historically \
     used mercury-based chemical exchange (COLEX, banned due to toxicity). Modern research seeks \
     greener alternatives. This demo shows why gaseous methods are impractical for light elements.";

/// Writes the numeric results of one calculation, rounded to whole units.
pub(crate) fn write_results(
    out: &mut impl Write,
    example: &Example,
    params: &SeparationParameters,
    calc: &Calculation,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Results for {:.1}% enrichment:",
        params.product_assay().get::<percent>()
    )?;
    writeln!(
        out,
        "Feed required: {:.0} units",
        calc.work.feed.get::<kilogram>()
    )?;
    writeln!(
        out,
        "Tails discarded: {:.0} units",
        calc.work.tails.get::<kilogram>()
    )?;
    writeln!(
        out,
        "Separative Work (SWU): {:.0}",
        calc.work.swu.get::<kilogram>()
    )?;
    writeln!(
        out,
        "Approx. stages needed: {:.0} {}",
        calc.stages.total(),
        example.method.stage_label()
    )?;

    if !params.separation_factor().separates() {
        writeln!(out, "Note: {NO_SEPARATION}")?;
    }

    if example.method == Method::Diffusion {
        writeln!(out, "Warning: {DIFFUSION_WARNING}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use twine_core::Model;

    use super::*;
    use crate::{catalog, models::enrichment::EnrichmentModel};

    fn report(index: usize, alpha: f64) -> String {
        let example = &catalog::examples()[index];
        let params = SeparationParameters::from_fractions(
            1000.0,
            0.045,
            example.feed_fraction,
            0.0025,
            alpha,
        )
        .expect("valid parameters");
        let calc = EnrichmentModel::default().call(&params).expect("infallible");

        let mut out = Vec::new();
        write_results(&mut out, example, &params, &calc).expect("write to vec");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn centrifuge_results() {
        let text = report(0, 1.4);
        assert!(text.contains("Results for 4.5% enrichment:"));
        assert!(text.contains("Feed required: 9219 units"));
        assert!(text.contains("Tails discarded: 8219 units"));
        assert!(text.contains("Separative Work (SWU): -4496"));
        assert!(text.contains("Approx. stages needed: 9 (centrifuge)"));
        assert!(!text.contains(DIFFUSION_WARNING));
        assert!(!text.contains(NO_SEPARATION));
    }

    #[test]
    fn diffusion_results_carry_the_warning() {
        let text = report(1, 1.0043);
        assert!(text.contains("Approx. stages needed: 674 (diffusion – very high!)"));
        assert!(text.contains(DIFFUSION_WARNING));
    }

    #[test]
    fn impossible_cascade_reports_infinity() {
        let text = report(0, 1.0);
        assert!(text.contains("Approx. stages needed: inf (centrifuge)"));
        assert!(text.contains(NO_SEPARATION));
    }
}
