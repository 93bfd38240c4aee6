// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

#![allow(clippy::unwrap_used)]
//! End-to-end tests for the distpress binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn distpress() -> Command {
    Command::cargo_bin("distpress").unwrap()
}

fn write_asset(dir: &Path, name: &str, len: usize) {
    let content: Vec<u8> = b"export const chunk = 'aaaaaaaa';\n"
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect();
    std::fs::write(dir.join(name), content).unwrap();
}

#[test]
fn compresses_selected_files_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);
    write_asset(dir.path(), "logo.png", 4096);

    distpress()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app.js"))
        .stdout(predicate::str::contains("total"));

    assert!(dir.path().join("app.js.gz").exists());
    // not a web asset pattern, untouched
    assert!(!dir.path().join("logo.png.gz").exists());
}

#[test]
fn quiet_mode_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("app.js.gz").exists());
}

#[test]
fn json_mode_emits_machine_readable_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    let output = distpress()
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert!(json["totals"]["original_size"].as_u64().unwrap() >= 4096);
}

#[test]
fn missing_directory_is_a_successful_no_op() {
    let dir = tempfile::tempdir().unwrap();
    distpress()
        .arg(dir.path().join("never-built"))
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to compress"));
}

#[test]
fn brotli_writes_br_siblings() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .args(["--algorithm", "brotli"])
        .assert()
        .success();

    assert!(dir.path().join("app.js.br").exists());
}

#[test]
fn explicit_extension_is_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .args(["--ext", "zz"])
        .assert()
        .success();

    assert!(dir.path().join("app.js.zz").exists());
    assert!(!dir.path().join("app.js.gz").exists());
}

#[test]
fn deflate_without_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .args(["--algorithm", "deflate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output_extension"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    distpress()
        .arg(dir.path())
        .args(["--algorithm", "zstd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn threshold_flag_excludes_small_files() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "big.js", 8192);
    write_asset(dir.path(), "small.js", 512);

    distpress()
        .arg(dir.path())
        .args(["--threshold", "1025", "--quiet"])
        .assert()
        .success();

    assert!(dir.path().join("big.js.gz").exists());
    assert!(!dir.path().join("small.js.gz").exists());
}

#[test]
fn delete_original_flag_removes_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .args(["--delete-original", "--quiet"])
        .assert()
        .success();

    assert!(!dir.path().join("app.js").exists());
    assert!(dir.path().join("app.js.gz").exists());
}

#[test]
fn check_flag_verifies_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .args(["--check", "--quiet"])
        .assert()
        .success();
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    write_asset(&out, "app.js", 4096);

    let config = dir.path().join("distpress.toml");
    std::fs::write(
        &config,
        r#"
        [compression]
        algorithm = "brotli"
        verbose = false
        "#,
    )
    .unwrap();

    distpress()
        .arg(&out)
        .args(["--config"])
        .arg(&config)
        .assert()
        .success();

    assert!(out.join("app.js.br").exists());
}

#[test]
fn custom_pattern_overrides_the_default_selection() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "data.csv", 4096);
    write_asset(dir.path(), "app.js", 4096);

    distpress()
        .arg(dir.path())
        .args(["--pattern", "*.csv", "--quiet"])
        .assert()
        .success();

    assert!(dir.path().join("data.csv.gz").exists());
    assert!(!dir.path().join("app.js.gz").exists());
}
