// End-to-end pipeline over a fake process runner: no compiler, no artifact,
// just scripted child-process behavior.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use run_tests::cli::run_with;
use run_tests::config::HarnessConfig;
use run_tests::errors::HarnessError;
use run_tests::process::{Captured, ProcessRunner, Termination};
use termcolor::Buffer;

/// Replays a fixed queue of child-process results and records every
/// invocation the harness makes.
struct ScriptedRunner {
    responses: RefCell<VecDeque<Captured>>,
    calls: RefCell<Vec<(PathBuf, Vec<OsString>)>>,
}

impl ScriptedRunner {
    fn new(responses: Vec<Captured>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls_to(&self, program: &Path) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(p, _)| p == program)
            .count()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<Captured, HarnessError> {
        self.calls
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec()));
        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .expect("harness spawned more processes than the script expected"))
    }
}

fn exited(output: &[u8]) -> Captured {
    Captured {
        output: output.to_vec(),
        termination: Termination::Exited(0),
    }
}

fn signaled(output: &[u8], sig: i32) -> Captured {
    Captured {
        output: output.to_vec(),
        termination: Termination::Signaled(sig),
    }
}

/// Scratch test root holding real (empty) source files so the
/// missing-file precondition check passes.
struct ScratchRoot {
    path: PathBuf,
}

impl ScratchRoot {
    fn new(tag: &str, files: &[&str]) -> Self {
        let path = std::env::temp_dir().join(format!("run-tests-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&path).unwrap();
        for name in files {
            fs::write(path.join(name), "").unwrap();
        }
        Self { path }
    }

    fn config(&self) -> HarnessConfig {
        HarnessConfig {
            test_root: self.path.clone(),
            ..HarnessConfig::default()
        }
    }
}

impl Drop for ScratchRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn render(
    names: &[&str],
    config: &HarnessConfig,
    runner: &ScriptedRunner,
) -> (Result<usize, HarnessError>, String) {
    let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    let mut out = Buffer::no_color();
    let result = run_with(&names, config, runner, &mut out);
    (result, String::from_utf8(out.into_inner()).unwrap())
}

#[test]
fn every_outcome_prints_one_line_in_argument_order() {
    let root = ScratchRoot::new(
        "taxonomy",
        &["ok.u", "fail.u", "crash.u", "silent.u", "noisy.u", "bad.u"],
    );
    let config = root.config();
    let runner = ScriptedRunner::new(vec![
        exited(b""),                 // ok.u: compile
        exited(b"PASS\n"),           // ok.u: run
        exited(b""),                 // fail.u: compile
        exited(b"FAIL\n"),           // fail.u: run
        exited(b""),                 // crash.u: compile
        signaled(b"partial", 11),    // crash.u: run
        exited(b""),                 // silent.u: compile
        exited(b""),                 // silent.u: run
        exited(b""),                 // noisy.u: compile
        exited(b"something else\n"), // noisy.u: run
        exited(b"syntax error\n"),   // bad.u: compile only
    ]);

    let (result, report) = render(
        &["ok.u", "fail.u", "crash.u", "silent.u", "noisy.u", "bad.u", "missing.u"],
        &config,
        &runner,
    );

    // Longest name is "missing.u" (9) plus the default margin of 3.
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "ok.u        PASS");
    assert_eq!(lines[1], "fail.u      FAIL");
    assert_eq!(lines[2], "crash.u     Received signal: 11");
    assert_eq!(lines[3], "silent.u    No Output");
    assert_eq!(lines[4], "noisy.u     Bad Output");
    assert_eq!(lines[5], "bad.u       Compilation Failed");
    assert_eq!(
        lines[6],
        format!(
            "missing.u   File does not exist: {}",
            config.test_root.join("missing.u").display()
        )
    );
    assert_eq!(lines[8], "7 tests: 1 passed, 6 failed");
    assert_eq!(result.unwrap(), 6);
}

#[test]
fn failed_compile_never_runs_the_artifact() {
    let root = ScratchRoot::new("noexec", &["bad.u"]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![exited(b"type error\n")]);

    let (result, report) = render(&["bad.u"], &config, &runner);

    assert_eq!(result.unwrap(), 1);
    assert!(report.contains("Compilation Failed"));
    assert_eq!(runner.calls_to(&config.compiler), 1);
    assert_eq!(runner.calls_to(&config.artifact), 0);
}

#[test]
fn missing_file_never_invokes_the_compiler() {
    let root = ScratchRoot::new("nocc", &[]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![]);

    let (result, report) = render(&["ghost.u"], &config, &runner);

    assert_eq!(result.unwrap(), 1);
    assert!(report.contains("File does not exist"));
    assert_eq!(runner.calls_to(&config.compiler), 0);
}

#[test]
fn compiler_is_invoked_with_the_fixed_flag_list() {
    let root = ScratchRoot::new("flags", &["ok.u"]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![exited(b""), exited(b"PASS")]);

    render(&["ok.u"], &config, &runner).0.unwrap();

    let calls = runner.calls.borrow();
    let (program, args) = &calls[0];
    assert_eq!(program, &config.compiler);
    assert_eq!(
        args,
        &vec![
            OsString::from("--eliminate-tail-recursion"),
            OsString::from("--lib-dir"),
            config.lib_dir.clone().into_os_string(),
            config.test_root.join("ok.u").into_os_string(),
        ]
    );

    // The artifact runs bare: no arguments.
    let (program, args) = &calls[1];
    assert_eq!(program, &config.artifact);
    assert!(args.is_empty());
}

#[test]
fn artifact_output_is_trimmed_before_comparison() {
    let root = ScratchRoot::new("trim", &["ok.u"]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![exited(b""), exited(b"  PASS \n")]);

    let (result, report) = render(&["ok.u"], &config, &runner);

    assert_eq!(result.unwrap(), 0);
    assert!(report.contains("PASS"));
}

#[test]
fn explicit_names_ignore_other_files_in_the_root() {
    let root = ScratchRoot::new("explicit", &["a.u", "b.u", "ignored.u"]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![
        exited(b""),
        exited(b"PASS"),
        exited(b""),
        exited(b"PASS"),
    ]);

    let (result, report) = render(&["a.u", "b.u"], &config, &runner);

    assert_eq!(result.unwrap(), 0);
    assert!(!report.contains("ignored.u"));
    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[0].starts_with("a.u"));
    assert!(lines[1].starts_with("b.u"));
}

#[test]
fn scanned_run_reports_in_sorted_order() {
    let root = ScratchRoot::new("scanrun", &["c.u", "a.u"]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![
        exited(b""),
        exited(b"PASS"),
        exited(b""),
        exited(b"FAIL"),
    ]);

    let (result, report) = render(&[], &config, &runner);

    assert_eq!(result.unwrap(), 1);
    let lines: Vec<&str> = report.lines().collect();
    assert!(lines[0].starts_with("a.u"));
    assert!(lines[1].starts_with("c.u"));
}

#[test]
fn undecodable_artifact_output_aborts_the_run() {
    let root = ScratchRoot::new("decode", &["ok.u"]);
    let config = root.config();
    let runner = ScriptedRunner::new(vec![exited(b""), exited(&[0xff, 0xfe])]);

    let (result, _) = render(&["ok.u"], &config, &runner);

    assert!(matches!(result, Err(HarnessError::Decode { .. })));
}
