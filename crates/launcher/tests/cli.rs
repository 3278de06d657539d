//! Exit status and diagnostics of the `bond-issuance` binary.
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bond-issuance"))
        .args(args)
        .env_remove("BOND_ISSUANCE_LOG")
        .output()
        .unwrap()
}

fn run_with_log(args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bond-issuance"))
        .args(args)
        .env("BOND_ISSUANCE_LOG", filter)
        .output()
        .unwrap()
}

#[test]
fn defaults_exit_successfully() {
    let output = run(&[]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("localhost:7600"), "stderr: {stderr}");
}

#[test]
fn explicit_options_are_logged() {
    let output = run(&["-s", "foo", "-p", "1234", "-u", "Issuer", "Bank1"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("foo:1234"), "stderr: {stderr}");
    assert!(stderr.contains("Issuer"), "stderr: {stderr}");
}

#[test]
fn non_numeric_port_exits_with_1() {
    let output = run(&["-p", "notanumber"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Invalid command line options"), "stderr: {stderr}");
    assert!(stderr.contains("notanumber"), "stderr: {stderr}");
    assert!(stderr.contains("SANDBOX_PORT"), "stderr: {stderr}");
}

#[test]
fn unknown_flag_exits_with_1() {
    let output = run(&["-x", "foo"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Invalid command line options"), "stderr: {stderr}");
    assert!(stderr.contains("PARTIES"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn help_flags_exit_with_1() {
    for flag in ["-h", "--help"] {
        let output = run(&[flag]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("Invalid command line options"), "stderr: {stderr}");
        assert!(stderr.contains("SANDBOX_HOST"), "stderr: {stderr}");
    }
}

#[test]
fn debug_log_records_which_options_were_defaulted() {
    let output = run_with_log(&["-s", "foo"], "bond_issuance_options=debug");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("defaulted_host=false"), "stderr: {stderr}");
    assert!(stderr.contains("defaulted_port=true"), "stderr: {stderr}");
    assert!(stderr.contains("defaulted_parties=true"), "stderr: {stderr}");
}
