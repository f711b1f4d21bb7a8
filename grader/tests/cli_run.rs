//! CLI tests for `grader run`, `grader list`, and `grader suite`.
//!
//! Spawns the grader binary and checks diagnostics on stdout and the exit
//! code for passing, failing, and misconfigured runs.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use grader::exit_codes;
use grader::report::SuiteReport;

fn grader(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grader"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run grader")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn faithful_submission_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = grader(temp.path(), &["run", "faithful"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(!text.contains("unexpected behaviour"));
    assert!(text.contains("summary: passed=22 mismatched=0 errored=0"));
}

#[test]
fn naive_power_reports_each_unsubstituted_hypotenuse() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = grader(temp.path(), &["run", "naive-power"]);
    assert_eq!(output.status.code(), Some(exit_codes::MISMATCH));
    let text = stdout(&output);
    let diagnostics: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("unexpected behaviour"))
        .collect();
    assert_eq!(diagnostics.len(), 6);
    assert_eq!(
        diagnostics[0],
        "unexpected behaviour for 'hypotenuse_of_right_triangle' with input: (1, 1)"
    );
    assert_eq!(
        diagnostics[5],
        "unexpected behaviour for 'hypotenuse_of_right_triangle' with input: (23.2, 0.2)"
    );
}

#[test]
fn default_run_keeps_diagnostics_off_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = grader(temp.path(), &["run", "naive-power"]);
    assert_eq!(output.status.code(), Some(exit_codes::MISMATCH));
    assert!(stdout(&output).contains("unexpected behaviour"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.trim().is_empty(), "unexpected stderr: {stderr}");
}

#[test]
fn config_can_disable_failing_exit() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("grader.toml"), "fail_on_mismatch = false\n").expect("config");
    let output = grader(temp.path(), &["run", "naive-power"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("unexpected behaviour"));
}

#[test]
fn suite_file_errors_do_not_stop_the_run() {
    let temp = tempfile::tempdir().expect("tempdir");
    let suite = Path::new(env!("CARGO_MANIFEST_DIR")).join("suites/edge_cases.toml");
    let out = temp.path().join("report.json");
    let output = grader(
        temp.path(),
        &[
            "run",
            "naive-power",
            "--suite",
            suite.to_str().expect("utf-8 path"),
            "--format",
            "json",
            "--out",
            out.to_str().expect("utf-8 path"),
        ],
    );
    assert_eq!(output.status.code(), Some(exit_codes::MISMATCH));

    let reports: Vec<SuiteReport> =
        serde_json::from_str(&fs::read_to_string(&out).expect("report")).expect("parse report");
    assert_eq!(reports.len(), 1);
    let summary = &reports[0].summary;
    assert_eq!(summary.total, 8);
    assert_eq!(summary.passed, 3);
    assert_eq!(summary.mismatched, 2);
    assert_eq!(summary.errored, 3);

    let printed: Vec<SuiteReport> = serde_json::from_str(&stdout(&output)).expect("stdout json");
    assert_eq!(printed, reports);
}

#[test]
fn unknown_submission_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = grader(temp.path(), &["run", "student42"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown submission student42"));
}

#[test]
fn malformed_suite_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let suite = temp.path().join("empty.toml");
    fs::write(&suite, "").expect("suite");
    let output = grader(
        temp.path(),
        &["run", "--suite", suite.to_str().expect("utf-8 path")],
    );
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn list_marks_the_reference() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = grader(temp.path(), &["list"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.lines().any(|line| line.starts_with("solution (reference):")));
    assert!(text.lines().any(|line| line.starts_with("naive-power:")));
}

#[test]
fn suite_prints_builtin_toml() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = grader(temp.path(), &["suite"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert_eq!(text.matches("[[power]]").count(), 5);
    assert_eq!(text.matches("[[hypotenuse]]").count(), 6);
}
