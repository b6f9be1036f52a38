use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-replicates"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run check-replicates")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_prints_true() {
    let output = run(&["-s", "sample1_R1", "sample1_R2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n");
}

#[test]
fn test_cli_prints_false() {
    let output = run(&["--sample-names", "sample1_L1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "false\n");
}

#[test]
fn test_cli_underscore_alias() {
    let output = run(&["--sample_names", "a_r1", "a_r2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n");
}

#[test]
fn test_cli_list_literal() {
    let output = run(&["-s", "[sample1_R1,", "sample1_R2]"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n");
}

#[test]
fn test_cli_malformed_name() {
    let output = run(&["-s", "sample1_R1", "sampleX"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("sampleX"));
}

#[test]
fn test_cli_missing_argument() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("--sample-names"));
}

#[test]
fn test_cli_flag_without_values() {
    let output = run(&["-s"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let output = run(&["-v", "-s", "s_R1", "s_R2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n");
    assert!(stderr(&output).contains("R1"));
}
