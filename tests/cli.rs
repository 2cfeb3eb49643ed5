//! CLI Tests
//!
//! Drives the compiled binary end to end against a throwaway data
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tinychirp(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tinychirp").expect("binary builds");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Test a bare invocation renders the seeded feed
#[test]
fn test_bare_invocation_shows_feed() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello TinyChirp"))
        .stdout(predicate::str::contains("Sarah Clark"));
}

/// Test a chirped post shows up in the next feed run
#[test]
fn test_chirp_then_feed_shows_post() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .args(["chirp", "Terminal post #cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chirped post"));

    tinychirp(&dir)
        .arg("feed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal post #cli"));
}

/// Test explore finds seeded posts and lists trending tags
#[test]
fn test_explore_finds_seeded_hashtag() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .args(["explore", "#tailwind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Angular + Tailwind"))
        .stdout(predicate::str::contains("#angular"));
}

/// Test the theme set in one run is reported by the next
#[test]
fn test_theme_persists_across_runs() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .args(["settings", "--theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved ✓"));

    tinychirp(&dir)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

/// Test liking reports the new like count
#[test]
fn test_like_reports_count() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .args(["like", "102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked post 102 (♥ 1)."));
}

/// Test acting on a missing post fails with its ID on stderr
#[test]
fn test_like_missing_post_fails() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .args(["like", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post 999"));
}

/// Test a blank chirp is rejected
#[test]
fn test_empty_chirp_fails() {
    let dir = TempDir::new().unwrap();

    tinychirp(&dir)
        .args(["chirp", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}
