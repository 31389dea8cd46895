//! Console adapter for the enrichment models.
//!
//! A [`Session`] walks the user through one round trip at a time: pick an
//! example, choose a target assay, product mass and separation factor,
//! trigger the calculation, choose a tails assay, and read the results and
//! the enrichment-profile chart. The session works over any reader/writer
//! pair, so the binary drives it with stdin/stdout and tests with buffers.

pub mod chart;
mod prompt;
mod report;

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use log::{debug, info, warn};
use twine_core::Model;

use crate::{
    catalog::{self, Example, SeparationRegime},
    models::enrichment::{
        EnrichmentModel, EnrichmentProfile, ProfileConfig, SeparationParameters,
    },
};

use chart::ChartConfig;
use prompt::{Prompter, display};

/// Settings for an interactive [`Session`].
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Point limits for the enrichment profile.
    pub profile: ProfileConfig,

    /// Labels and sizes of the rendered charts.
    pub chart: ChartConfig,

    /// Whether to offer an SVG export of the chart after each calculation.
    pub offer_export: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            chart: ChartConfig::default(),
            offer_export: true,
        }
    }
}

/// Inputs collected before the calculation is triggered.
#[derive(Debug, Clone, Copy)]
struct Inputs {
    target_percent: f64,
    product_kg: u32,
    alpha: f64,
}

/// Whether the session continues after a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive, single-user calculator session.
pub struct Session<R, W> {
    prompt: Prompter<R, W>,
    config: ShellConfig,
    model: EnrichmentModel,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with default settings.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, ShellConfig::default())
    }

    /// Creates a session with the given settings.
    pub fn with_config(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            prompt: Prompter::new(input, output),
            model: EnrichmentModel::new(config.profile),
            config,
        }
    }

    /// Runs round trips until the user quits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the console fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.banner()?;

        loop {
            let flow = self.round_trip()?;
            writeln!(self.out())?;
            writeln!(self.out(), "{}", report::LITHIUM_NOTE)?;

            if flow == Flow::Quit || !self.again()? {
                break;
            }
        }

        info!("session ended");
        Ok(())
    }

    fn out(&mut self) -> &mut W {
        self.prompt.output()
    }

    fn banner(&mut self) -> io::Result<()> {
        let out = self.out();
        writeln!(out, "{}", report::TITLE)?;
        writeln!(out, "{}", report::DISCLAIMER)?;
        writeln!(out)?;
        writeln!(out, "{}", report::HEADER)
    }

    fn round_trip(&mut self) -> io::Result<Flow> {
        let Some(example) = self.select_example()? else {
            return Ok(Flow::Quit);
        };
        info!("selected example: {}", example.name);

        let (light, heavy) = example.molecular_masses();
        writeln!(
            self.out(),
            "  {}: molecular masses {light} / {heavy}",
            example.compound
        )?;

        let Some(inputs) = self.collect_inputs(example)? else {
            return Ok(Flow::Quit);
        };

        let Some(trigger) = self.prompt.ask("Press Enter to calculate (q to quit)")? else {
            return Ok(Flow::Quit);
        };
        if trigger.eq_ignore_ascii_case("q") {
            return Ok(Flow::Quit);
        }

        let Some(tails_percent) = self.prompt.number(
            "Tails Fraction (%)",
            example.min_tails_percent()..=example.max_tails_percent(),
            example.default_tails_percent(),
        )?
        else {
            return Ok(Flow::Quit);
        };

        let params = match SeparationParameters::from_fractions(
            f64::from(inputs.product_kg),
            inputs.target_percent / 100.0,
            example.feed_fraction,
            tails_percent / 100.0,
            inputs.alpha,
        ) {
            Ok(params) => params,
            Err(err) => {
                warn!("rejected parameters: {err}");
                writeln!(self.out(), "Cannot calculate: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        debug!("parameters: {params:?}");

        let calc = match self.model.call(&params) {
            Ok(calc) => calc,
            Err(never) => match never {},
        };

        report::write_results(self.out(), example, &params, &calc)?;

        let text = chart::render_text(&calc.profile, &self.config.chart);
        writeln!(self.out())?;
        write!(self.out(), "{text}")?;

        if self.config.offer_export {
            self.offer_export(&calc.profile)?;
        }

        Ok(Flow::Continue)
    }

    fn select_example(&mut self) -> io::Result<Option<&'static Example>> {
        let examples = catalog::examples();
        writeln!(self.out())?;
        for (i, example) in examples.iter().enumerate() {
            writeln!(self.out(), "  {}. {}", i + 1, example.name)?;
        }

        loop {
            let Some(answer) = self.prompt.ask(&format!(
                "Choose Example [1–{}, default 1]",
                examples.len()
            ))?
            else {
                return Ok(None);
            };

            if answer.is_empty() {
                return Ok(examples.first());
            }
            if let Some(example) = catalog::find(&answer) {
                return Ok(Some(example));
            }
            if let Some(example) = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| examples.get(i))
            {
                return Ok(Some(example));
            }

            warn!("unknown example {answer:?}");
            writeln!(self.out(), "  Unknown example, enter a number or a name.")?;
        }
    }

    fn collect_inputs(&mut self, example: &Example) -> io::Result<Option<Inputs>> {
        let Some(target_percent) = self.prompt.number(
            "Target Light Isotope Fraction (%)",
            1.0..=99.0,
            example.default_target_percent(),
        )?
        else {
            return Ok(None);
        };

        let Some(product_kg) =
            self.prompt
                .integer("Product Mass (kg or equivalent)", 1..=100_000, 1000)?
        else {
            return Ok(None);
        };

        let alpha = match example.method.regime() {
            SeparationRegime::Adjustable { min, max, default } => {
                let Some(alpha) = self.prompt.number(
                    "Separation Factor α (typical 1.2–1.5)",
                    min..=max,
                    default,
                )?
                else {
                    return Ok(None);
                };
                alpha
            }
            SeparationRegime::Fixed { value, info } => {
                writeln!(self.out(), "  {info}")?;
                value
            }
        };
        debug!(
            "inputs: target={target_percent}%, product={product_kg} kg, alpha={}",
            display(alpha)
        );

        Ok(Some(Inputs {
            target_percent,
            product_kg,
            alpha,
        }))
    }

    fn offer_export(&mut self, profile: &EnrichmentProfile) -> io::Result<()> {
        let Some(path) = self.prompt.ask("Export chart as SVG (path, blank to skip)")? else {
            return Ok(());
        };
        if path.is_empty() {
            return Ok(());
        }

        match chart::export_svg(profile, &self.config.chart, Path::new(&path)) {
            Ok(()) => {
                info!("chart exported to {path}");
                writeln!(self.out(), "  Chart written to {path}")
            }
            Err(err) => {
                warn!("chart export failed: {err}");
                writeln!(self.out(), "  Could not export chart: {err}")
            }
        }
    }

    fn again(&mut self) -> io::Result<bool> {
        let answer = self.prompt.ask("Run another calculation? [y/N]")?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        Session::new(input.as_bytes(), &mut out)
            .run()
            .expect("console io");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn centrifuge_round_trip() {
        let text = transcript("1\n4.5\n1000\n1.4\n\n0.25\n\nn\n");

        assert!(text.starts_with(report::TITLE));
        assert!(text.contains("Results for 4.5% enrichment:"));
        assert!(text.contains("UF6: molecular masses 349 / 352"));
        assert!(text.contains("Feed required: 9219 units"));
        assert!(text.contains("Separative Work (SWU): -4496"));
        assert!(text.contains("Approx. stages needed: 9 (centrifuge)"));
        assert!(text.contains("Simplified Cascade Enrichment Profile"));
        assert!(!text.contains(report::DIFFUSION_WARNING));
        assert!(text.contains(report::LITHIUM_NOTE));
    }

    #[test]
    fn diffusion_round_trip_warns() {
        let text = transcript("2\n4.5\n1000\n\n0.25\n\nn\n");

        assert!(text.contains("Gaseous Diffusion α ≈ 1.0043 (fixed for UF6)"));
        assert!(text.contains("Approx. stages needed: 674 (diffusion – very high!)"));
        assert!(text.contains(report::DIFFUSION_WARNING));
    }

    #[test]
    fn defaults_and_selection_by_name() {
        let text = transcript("Deuterium (Heavy Water Historical)\n\n\n\n\n\n");

        assert!(text.contains("Girdler-Sulfide: α ≈ 2.33 (cold) / 1.82 (hot)"));
        assert!(text.contains("Results for 30.0% enrichment:"));
        assert!(text.contains("Approx. stages needed: 14 (chemical exchange towers)"));
    }

    #[test]
    fn misordered_assays_are_reported() {
        // Lithium feed is 7.5 %, so a 1 % target cannot be reached by enrichment.
        let text = transcript("4\n1\n1000\n\n0.75\nn\n");

        assert!(text.contains("Not gaseous."));
        assert!(text.contains("Cannot calculate: assays must satisfy tails < feed < product"));
        assert!(!text.contains("Results for"));
    }

    #[test]
    fn tails_at_feed_assay_are_kept_below_it() {
        let text = transcript("1\n\n\n\n\n0.711\n\nn\n");
        assert!(text.contains("(clamped to 0.7039)"));
        assert!(!text.contains("Cannot calculate"));
        assert!(text.contains("Results for 4.5% enrichment:"));
    }

    #[test]
    fn quit_at_trigger() {
        let text = transcript("1\n\n\n\nq\n");
        assert!(!text.contains("Results for"));
        assert!(text.contains(report::LITHIUM_NOTE));
        assert!(!text.contains("Run another calculation?"));
    }

    #[test]
    fn unknown_example_is_asked_again() {
        let text = transcript("7\nPlutonium\n1\n\n\n\n\n\n\nn\n");
        assert_eq!(text.matches("Unknown example").count(), 2);
        assert!(text.contains("Results for 4.5% enrichment:"));
    }

    #[test]
    fn repeats_until_declined() {
        let text = transcript("1\n\n\n\n\n\n\ny\n2\n\n\n\n\n\nn\n");
        assert_eq!(text.matches("Results for").count(), 2);
        assert!(text.contains(report::DIFFUSION_WARNING));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let text = transcript("1\n4.5\n");
        assert!(!text.contains("Results for"));
        assert!(text.contains(report::LITHIUM_NOTE));
    }

    #[test]
    fn export_failure_is_reported() {
        let text = transcript("1\n\n\n\n\n\n/nonexistent-dir/profile.svg\nn\n");
        assert!(text.contains("Could not export chart"));
    }
}
