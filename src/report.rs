//! Renders one aligned, color-coded line per test case.
//!
//! The name column is sized once from the whole discovered list, so lines
//! stay aligned no matter which outcome each case lands on. Writing goes
//! through `termcolor`'s `WriteColor` so tests can render into a buffer.

use std::io::Write;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::discovery::TestCase;
use crate::outcome::Outcome;

/// Prints report lines with a fixed-width name column.
#[derive(Debug)]
pub struct Reporter {
    width: usize,
}

impl Reporter {
    /// Column width is the longest display name across the run plus the
    /// margin. Computed once, before any case runs.
    pub fn new(cases: &[TestCase], margin: usize) -> Self {
        let longest = cases
            .iter()
            .map(|c| c.display_name.len())
            .max()
            .unwrap_or(0);
        Self {
            width: longest + margin,
        }
    }

    pub fn column_width(&self) -> usize {
        self.width
    }

    /// Writes the padded test name followed by the outcome's colored label.
    pub fn print_line(
        &self,
        out: &mut dyn WriteColor,
        case: &TestCase,
        outcome: &Outcome,
    ) -> std::io::Result<()> {
        write!(out, "{:<width$}", case.display_name, width = self.width)?;
        out.set_color(ColorSpec::new().set_fg(Some(color_of(outcome))))?;
        write!(out, "{}", label_of(outcome))?;
        out.reset()?;
        writeln!(out)
    }

    /// One trailing line after all cases: totals for the run.
    pub fn print_summary(
        &self,
        out: &mut dyn WriteColor,
        total: usize,
        failures: usize,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "\n{} tests: {} passed, {} failed",
            total,
            total - failures,
            failures
        )
    }
}

fn color_of(outcome: &Outcome) -> Color {
    match outcome {
        Outcome::Pass => Color::Green,
        _ => Color::Red,
    }
}

fn label_of(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Pass => "PASS".to_string(),
        Outcome::Fail => "FAIL".to_string(),
        Outcome::CompileError => "Compilation Failed".to_string(),
        Outcome::ExecutionError(sig) => format!("Received signal: {}", sig),
        Outcome::NoOutput => "No Output".to_string(),
        Outcome::UnexpectedOutput => "Bad Output".to_string(),
        Outcome::MissingFile(path) => format!("File does not exist: {}", path.display()),
    }
}
