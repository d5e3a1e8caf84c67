//! Integration tests for the `ddnsly` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! the seeded roster, validation checks, and error handling.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `ddnsly` binary with env isolation.
///
/// Clears all `DDNSLY_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration —
/// every invocation sees the built-in default config (the two example
/// seed clients).
fn ddnsly_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ddnsly");
    cmd.env("HOME", "/tmp/ddnsly-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/ddnsly-cli-test-nonexistent")
        .env_remove("DDNSLY_CONFIG")
        .env_remove("DDNSLY_OUTPUT")
        .env_remove("DDNSLY_DEFAULTS_OUTPUT")
        .env_remove("DDNSLY_DEFAULTS_COLOR");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = ddnsly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    ddnsly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("DDNS")
            .and(predicate::str::contains("clients"))
            .and(predicate::str::contains("stats"))
            .and(predicate::str::contains("open")),
    );
}

#[test]
fn test_version_flag() {
    ddnsly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ddnsly"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    ddnsly_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    ddnsly_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Seeded roster ───────────────────────────────────────────────────

#[test]
fn test_clients_list_shows_seeds() {
    ddnsly_cmd()
        .args(["clients", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Example Client 1")
                .and(predicate::str::contains("client1.ddns.net"))
                .and(predicate::str::contains("Example Client 2"))
                .and(predicate::str::contains("Mikrotik")),
        );
}

#[test]
fn test_clients_list_json() {
    let output = ddnsly_cmd()
        .args(["--output", "json", "clients", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    let clients = parsed.as_array().unwrap();
    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0]["ddns_link"], "client1.ddns.net");
    assert_eq!(clients[1]["equipment"], "mikrotik");
}

#[test]
fn test_clients_get_by_name() {
    ddnsly_cmd()
        .args(["clients", "get", "example client 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client1.ddns.net"));
}

#[test]
fn test_clients_get_unknown_exits_not_found() {
    let output = ddnsly_cmd()
        .args(["clients", "get", "no-such-client"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4), "Expected not-found exit code");
    let text = combined_output(&output);
    assert!(text.contains("not found"), "Expected not-found error:\n{text}");
}

// ── Validation checks ───────────────────────────────────────────────

#[test]
fn test_check_valid_candidate() {
    ddnsly_cmd()
        .args([
            "clients",
            "check",
            "--name",
            "Acme Corp",
            "--link",
            "acme.ddns.net",
            "--equipment",
            "fortigate",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_check_reports_every_violation() {
    let output = ddnsly_cmd()
        .args(["clients", "check", "--link", "not a domain!!"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("client name is required")
            && text.contains("DDNS link must be a valid domain")
            && text.contains("equipment is required"),
        "Expected all violations reported together:\n{text}"
    );
}

#[test]
fn test_check_rejects_unknown_equipment() {
    let output = ddnsly_cmd()
        .args([
            "clients",
            "check",
            "--name",
            "Acme",
            "--link",
            "acme.ddns.net",
            "--equipment",
            "cisco",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("possible values") || text.contains("invalid value"),
        "Expected clap to list the valid equipment values:\n{text}"
    );
}

// ── Stats ───────────────────────────────────────────────────────────

#[test]
fn test_stats_table_output() {
    ddnsly_cmd().arg("stats").assert().success().stdout(
        predicate::str::contains("Total clients:    2")
            .and(predicate::str::contains("Equipment types:  2"))
            .and(predicate::str::contains("Fortigate"))
            .and(predicate::str::contains("Mikrotik")),
    );
}

#[test]
fn test_stats_json_omits_zero_counts() {
    let output = ddnsly_cmd()
        .args(["--output", "json", "stats"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total_clients"], 2);
    assert_eq!(parsed["unique_equipments"], 2);
    let distribution = parsed["equipment_distribution"].as_array().unwrap();
    assert_eq!(distribution.len(), 2);
    assert_eq!(distribution[0]["equipment"], "fortigate");
    assert_eq!(distribution[0]["count"], 1);
}

// ── Open ────────────────────────────────────────────────────────────

#[test]
fn test_open_unknown_client_exits_not_found() {
    let output = ddnsly_cmd()
        .args(["open", "no-such-client"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_without_file_renders_defaults() {
    // `config show` falls back to the built-in defaults when no file exists.
    ddnsly_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client1.ddns.net"));
}

#[test]
fn test_config_path_prints_a_path() {
    ddnsly_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_writes_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    ddnsly_cmd()
        .args(["--config", path_str, "config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    let output = ddnsly_cmd()
        .args(["--config", path_str, "config", "init"])
        .output()
        .unwrap();
    assert!(!output.status.success(), "Expected refusal without --force");

    ddnsly_cmd()
        .args(["--config", path_str, "config", "init", "--force"])
        .assert()
        .success();
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = ddnsly_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = ddnsly_cmd()
        .args(["--output", "invalid", "clients", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_clients_subcommands_exist() {
    ddnsly_cmd()
        .args(["clients", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("check")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    ddnsly_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("path")),
        );
}
