//! CLI Integration Tests
//!
//! End-to-end checks of the `cryptoworld` binary against a throwaway data
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cryptoworld").expect("Failed to find cryptoworld binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

// ============================================================================
// Content Command Tests
// ============================================================================

#[test]
fn test_markets_lists_all_tickers() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("markets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Market Overview"))
        .stdout(predicate::str::contains("$67,420.50"))
        .stdout(predicate::str::contains("$0.6234"))
        .stdout(predicate::str::contains("-1.2%"))
        .stdout(predicate::str::contains("Market Cap: $1.32T"));
}

#[test]
fn test_markets_json() {
    let data_dir = TempDir::new().unwrap();

    let output = cli_cmd(&data_dir)
        .args(["markets", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_start().starts_with('['));
    assert!(stdout.contains("\"symbol\": \"BTC\""));
    assert!(stdout.contains("\"change_24h\": -1.2"));
}

#[test]
fn test_trending() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("trending")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trending Now"))
        .stdout(predicate::str::contains("PEPE"))
        .stdout(predicate::str::contains("+45.2%"));
}

#[test]
fn test_topics_news_and_blog() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. What is Blockchain?"));

    cli_cmd(&data_dir)
        .arg("news")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 hours ago"))
        .stdout(predicate::str::contains("[Bitcoin]"));

    cli_cmd(&data_dir)
        .arg("blog")
        .assert()
        .success()
        .stdout(predicate::str::contains("(Featured)"))
        .stdout(predicate::str::contains("min read"));
}

// ============================================================================
// Glossary Command Tests
// ============================================================================

#[test]
fn test_glossary_single_match() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["glossary", "hodl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HODL"))
        .stdout(predicate::str::contains("DeFi").not());
}

#[test]
fn test_glossary_without_query_lists_everything() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("glossary")
        .assert()
        .success()
        .stdout(predicate::str::contains("HODL"))
        .stdout(predicate::str::contains("Smart Contract"))
        .stdout(predicate::str::contains("Gas Fee"));
}

#[test]
fn test_glossary_no_match() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["glossary", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No terms found matching \"zzzz\""));
}

// ============================================================================
// Theme Command Tests
// ============================================================================

#[test]
fn test_theme_defaults_to_dark() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn test_theme_toggle_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    cli_cmd(&data_dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn test_theme_set() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "LIGHT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_theme_set_rejects_unknown() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["theme", "set", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme: purple"));

    // Nothing was written
    cli_cmd(&data_dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

// ============================================================================
// Subscribe Command Tests
// ============================================================================

#[test]
fn test_subscribe_valid_email() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["subscribe", "satoshi@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribing..."))
        .stdout(predicate::str::contains(
            "Successfully subscribed to newsletter!",
        ));
}

#[test]
fn test_subscribe_invalid_email() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["subscribe", "not-an-email"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Subscribing...").not())
        .stderr(predicate::str::contains("Could not subscribe"))
        .stderr(predicate::str::contains("Invalid email address: not-an-email"));
}

#[test]
fn test_subscribe_empty_email() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["subscribe", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email address is empty"));
}

#[test]
fn test_help_lists_commands() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("glossary"))
        .stdout(predicate::str::contains("subscribe"));
}
