//! Line-oriented prompts over a reader/writer pair.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use log::warn;

/// Reads answers from `input` and writes questions to `output`.
///
/// Every method returns `Ok(None)` once the input is exhausted, so callers
/// can end the session cleanly on end-of-file.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks a free-form question and returns the trimmed answer.
    pub(crate) fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Asks for a number, clamping the answer into `range`.
    ///
    /// A blank answer takes `default`. Unparsable answers are rejected and
    /// the question is asked again.
    pub(crate) fn number(
        &mut self,
        label: &str,
        range: RangeInclusive<f64>,
        default: f64,
    ) -> io::Result<Option<f64>> {
        let (min, max) = (*range.start(), *range.end());
        let question = format!(
            "{label} [{}–{}, default {}]",
            display(min),
            display(max),
            display(default)
        );

        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default.clamp(min, max)));
            }

            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    let clamped = value.clamp(min, max);
                    if clamped != value {
                        warn!("{label}: {value} clamped to {clamped}");
                        writeln!(self.output, "  (clamped to {})", display(clamped))?;
                    }
                    return Ok(Some(clamped));
                }
                _ => {
                    warn!("{label}: rejected {answer:?}");
                    writeln!(self.output, "  Please enter a number.")?;
                }
            }
        }
    }

    /// Asks for a whole number, clamping the answer into `range`.
    pub(crate) fn integer(
        &mut self,
        label: &str,
        range: RangeInclusive<u32>,
        default: u32,
    ) -> io::Result<Option<u32>> {
        let (min, max) = (*range.start(), *range.end());
        let question = format!("{label} [{min}–{max}, default {default}]");

        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default.clamp(min, max)));
            }

            match answer.parse::<i64>() {
                Ok(value) => {
                    let clamped = value.clamp(i64::from(min), i64::from(max));
                    if clamped != value {
                        warn!("{label}: {value} clamped to {clamped}");
                        writeln!(self.output, "  (clamped to {clamped})")?;
                    }
                    return Ok(Some(u32::try_from(clamped).unwrap_or(min)));
                }
                Err(_) => {
                    warn!("{label}: rejected {answer:?}");
                    writeln!(self.output, "  Please enter a whole number.")?;
                }
            }
        }
    }
}

/// Formats a number with at most four decimals and no trailing zeros.
pub(crate) fn display(value: f64) -> String {
    let text = format!("{value:.4}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text
    }
}
