//! The harness command-line interface.
//!
//! This module is the entry point for the `run-tests` binary and
//! orchestrates the per-case pipeline: discovery, then for each test case
//! in order, compile, run, classify, report. Strictly sequential; each
//! child process is waited on before the next step starts.

use clap::Parser;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::cli::args::HarnessArgs;
use crate::compile::compile;
use crate::config::HarnessConfig;
use crate::discovery::{self, TestCase};
use crate::errors::HarnessError;
use crate::execute::run_artifact;
use crate::outcome::{classify, Outcome};
use crate::process::{ProcessRunner, SystemRunner};
use crate::report::Reporter;

pub mod args;

/// The main entry point for the CLI. Returns the number of test cases
/// whose outcome was anything other than `Pass`.
pub fn run() -> Result<usize, HarnessError> {
    let args = HarnessArgs::parse();
    let config = HarnessConfig::default();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    run_with(&args.files, &config, &SystemRunner, &mut stdout)
}

/// Runs the whole harness against the given collaborators. Split out from
/// [`run`] so tests can substitute a fake process runner and capture the
/// report.
pub fn run_with(
    names: &[String],
    config: &HarnessConfig,
    runner: &dyn ProcessRunner,
    out: &mut dyn WriteColor,
) -> Result<usize, HarnessError> {
    let cases = if names.is_empty() {
        discovery::discover_all(config)?
    } else {
        discovery::resolve_named(names, config)
    };

    let reporter = Reporter::new(&cases, config.name_margin);
    let mut failures = 0;
    for case in &cases {
        let outcome = run_case(case, config, runner)?;
        if !outcome.is_pass() {
            failures += 1;
        }
        reporter.print_line(out, case, &outcome)?;
    }
    reporter.print_summary(out, cases.len(), failures)?;
    Ok(failures)
}

/// Takes one test case through compile, run, and classification.
///
/// A missing source file short-circuits before the compiler is touched; a
/// noisy compile short-circuits before the (possibly stale) artifact could
/// be run.
fn run_case(
    case: &TestCase,
    config: &HarnessConfig,
    runner: &dyn ProcessRunner,
) -> Result<Outcome, HarnessError> {
    if !case.path.is_file() {
        return Ok(Outcome::MissingFile(case.path.clone()));
    }

    let compiled = compile(case, config, runner)?;
    if !compiled.is_success() {
        return Ok(classify(&compiled, None));
    }

    let execution = run_artifact(config, runner)?;
    Ok(classify(&compiled, Some(&execution)))
}
