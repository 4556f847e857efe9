//! Integration tests for the CLI interface

mod common;

use assert_cmd::Command;
use common::{TestContext, SAMPLE_CSV};
use predicates::prelude::*;

fn fixer(ctx: &TestContext) -> Command {
    let mut cmd = Command::cargo_bin("fixer").unwrap();
    cmd.current_dir(ctx.path())
        .env_remove("FIXER_INPUT")
        .env_remove("FIXER_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help_flag() {
    let ctx = TestContext::new();
    fixer(&ctx)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_no_arguments_uses_fixed_file_names() {
    let ctx = TestContext::with_input(SAMPLE_CSV);

    fixer(&ctx)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(ctx.read_file("data_fixed.csv"), "x, 10\np, 20\n");
}

#[test]
fn test_missing_input_exits_with_input_code() {
    let ctx = TestContext::new();

    fixer(&ctx)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error: Cannot read input data.csv"));

    assert!(!ctx.exists("data_fixed.csv"));
}

#[test]
fn test_malformed_row_exits_with_row_code() {
    let ctx = TestContext::with_input("id,a,b,c,val\n1,x,y,z,10\n2,p,q\n");

    fixer(&ctx)
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "Data row 2 has 3 field(s) but at least 5 are required",
        ));

    assert!(!ctx.exists("data_fixed.csv"));
}

#[test]
fn test_blank_line_exits_with_row_code() {
    let ctx = TestContext::with_input("id,a,b,c,val\n1,x,y,z,10\n\n");

    fixer(&ctx)
        .assert()
        .code(4)
        .stderr(predicate::str::contains(
            "Data row 2 has 0 field(s) but at least 5 are required",
        ));

    assert!(!ctx.exists("data_fixed.csv"));
}

#[test]
fn test_flags_override_paths() {
    let ctx = TestContext::new();
    ctx.write_file("in/source.csv", SAMPLE_CSV);

    fixer(&ctx)
        .args(["-i", "in/source.csv", "-o", "result.txt"])
        .assert()
        .success();

    assert_eq!(ctx.read_file("result.txt"), "x, 10\np, 20\n");
    assert!(!ctx.exists("data_fixed.csv"));
}

#[test]
fn test_env_overrides_paths() {
    let ctx = TestContext::new();
    ctx.write_file("env.csv", SAMPLE_CSV);

    fixer(&ctx)
        .env("FIXER_INPUT", "env.csv")
        .env("FIXER_OUTPUT", "env_out.txt")
        .assert()
        .success();

    assert_eq!(ctx.read_file("env_out.txt"), "x, 10\np, 20\n");
}

#[test]
fn test_flag_beats_env() {
    let ctx = TestContext::with_input(SAMPLE_CSV);

    fixer(&ctx)
        .env("FIXER_OUTPUT", "from_env.txt")
        .args(["--output", "from_flag.txt"])
        .assert()
        .success();

    assert!(ctx.exists("from_flag.txt"));
    assert!(!ctx.exists("from_env.txt"));
}

#[test]
fn test_config_file_in_working_dir() {
    let ctx = TestContext::new();
    ctx.write_file("raw.csv", SAMPLE_CSV);
    ctx.write_file(
        "fixer.toml",
        "input_path = \"raw.csv\"\noutput_path = \"fixed.txt\"\n",
    );

    fixer(&ctx).assert().success();

    assert_eq!(ctx.read_file("fixed.txt"), "x, 10\np, 20\n");
}

#[test]
fn test_missing_explicit_config_exits_with_config_code() {
    let ctx = TestContext::with_input(SAMPLE_CSV);

    fixer(&ctx)
        .args(["--config", "absent.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_verbose_prints_context_chain() {
    let ctx = TestContext::new();

    fixer(&ctx)
        .arg("-v")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E2001: Input file not found"))
        .stderr(predicate::str::contains("Context Chain:"))
        .stderr(predicate::str::contains("[E2001]"));
}

#[test]
fn test_positional_argument_is_rejected() {
    let ctx = TestContext::new();

    fixer(&ctx)
        .arg("data.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
