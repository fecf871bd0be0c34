//! End-to-end tests for the `skip-rm` binary.
//!
//! Each test writes a config and a pattern list into a scratch directory,
//! points `SKIP_RM_CONFIG` at the config, and runs the binary with a harmless
//! wrapped command.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use test_support::{TempDir, scratch_dir, write_config, write_lines};

fn setup(command: &str, matcher: &str, mode: &str, patterns: &[&str]) -> TempDir {
    let dir = scratch_dir();
    let list = write_lines(dir.path(), "patterns", patterns);
    write_config(
        dir.path(),
        &format!(
            concat!(
                r#"{{"command": "{0}", "matcher": "{1}", "#,
                r#""mode": "{2}", "{2}": "{3}"}}"#,
            ),
            command,
            matcher,
            mode,
            list.display()
        ),
    );
    dir
}

fn skip_rm(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skip-rm"));
    cmd.env("SKIP_RM_CONFIG", dir.join("skip-rm.conf"))
        .env_remove("SKIP_RM_LOG")
        .current_dir(dir);
    cmd
}

// ============================================================================
// Forwarding
// ============================================================================

/// Verifies blacklisted operands are withheld and announced.
#[test]
fn blacklist_withholds_matching_operands() {
    let dir = setup("echo", "glob", "blacklist", &["**/precious*"]);

    skip_rm(dir.path())
        .args(["-rf", "junk.txt", "precious.txt", "other"])
        .assert()
        .success()
        .stdout("-rf junk.txt other\n")
        .stderr("skipping precious.txt...\n");
}

/// Verifies whitelist mode keeps only listed operands.
#[test]
fn whitelist_keeps_listed_operands() {
    let dir = setup("echo", "glob", "whitelist", &["**/*.tmp"]);

    skip_rm(dir.path())
        .args(["a.tmp", "b.txt", "c.tmp"])
        .assert()
        .success()
        .stdout("a.tmp c.tmp\n")
        .stderr("skipping b.txt...\n");
}

/// Verifies the separator and the operands after it are handled.
#[test]
fn separator_makes_dash_operands_matchable() {
    let dir = setup("echo", "glob", "blacklist", &["**/-keep"]);

    skip_rm(dir.path())
        .args(["--", "-keep", "x"])
        .assert()
        .success()
        .stdout("-- x\n")
        .stderr("skipping -keep...\n");
}

/// Verifies nothing is printed when nothing is skipped.
#[test]
fn no_matches_no_notices() {
    let dir = setup("echo", "regex", "blacklist", &["/nowhere/.*"]);

    skip_rm(dir.path())
        .args(["a", "b"])
        .assert()
        .success()
        .stdout("a b\n")
        .stderr("");
}

/// Verifies the wrapped command's exit status is returned.
#[test]
fn exit_status_is_propagated() {
    let dir = setup("sh", "string", "blacklist", &[]);

    skip_rm(dir.path()).args(["-c", "exit 42"]).assert().code(42);
}

// ============================================================================
// Failures
// ============================================================================

/// Verifies a missing config is fatal with status 1.
#[test]
fn missing_config_is_fatal() {
    let dir = scratch_dir();

    skip_rm(dir.path())
        .arg("x")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("skip-rm: no config file found"));
}

/// Verifies an invalid matcher token is fatal.
#[test]
fn invalid_matcher_is_fatal() {
    let dir = setup("echo", "fnmatch", "blacklist", &[]);

    skip_rm(dir.path())
        .arg("x")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid matcher 'fnmatch'"));
}

/// Verifies a malformed regex stops the command from running.
#[test]
fn malformed_regex_is_fatal() {
    let dir = setup("echo", "regex", "blacklist", &["[unclosed"]);

    skip_rm(dir.path())
        .arg("x")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("skip-rm: failed to compile regex pattern"));
}

/// Verifies a command that cannot be found exits 127.
#[test]
fn unknown_command_exits_127() {
    let dir = setup("skip-rm-no-such-command", "glob", "blacklist", &[]);

    skip_rm(dir.path())
        .arg("x")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("skip-rm-no-such-command"));
}
