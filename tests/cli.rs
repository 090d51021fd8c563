//! End-to-end tests driving the binary in headless mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::ffi::OsStr;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn txtplot() -> Command {
    Command::cargo_bin("txtplot").unwrap()
}

fn headless<P: AsRef<OsStr>>(files: &[P]) -> Command {
    let mut cmd = txtplot();
    cmd.args(["--headless", "--width", "80", "--height", "30"]);
    cmd.args(files);
    cmd
}

#[test]
fn single_column_file_renders_titled_panel() {
    let dir = TempDir::new().unwrap();
    let loss = write(&dir, "loss.txt", "3.0\n2.1\n1.7\n1.2\n0.9\n");

    headless(&[&loss])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Reading {}", loss.display())))
        .stdout(predicate::str::contains("Plots"))
        .stdout(predicate::str::contains(" loss.txt "));
}

#[test]
fn one_panel_per_file_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "first.txt", "1\n2\n3\n");
    let b = write(&dir, "second.txt", "0  1\n1  4\n2  9\n");

    let output = headless(&[&a, &b]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find(" first.txt ").unwrap();
    let second = stdout.find(" second.txt ").unwrap();
    assert!(first < second);
}

#[test]
fn missing_file_stops_before_plotting() {
    let dir = TempDir::new().unwrap();
    let present = write(&dir, "present.txt", "1\n2\n");
    let missing = dir.path().join("missing.txt");

    headless(&[&missing, &present])
        .assert()
        .success()
        .stdout(predicate::str::contains("File doesn't seem to exist."))
        .stdout(predicate::str::contains("Plots").not())
        .stdout(predicate::str::contains("present.txt").not());
}

#[test]
fn pcolor_draws_heatmap_cells() {
    let dir = TempDir::new().unwrap();
    let grid = write(&dir, "grid.txt", "1\t2\t3\n4\t5\t6\n7\t8\t9\n");

    headless(&[&grid])
        .args(["--kind", "pcolor", "--palette", "viridis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("█"))
        .stdout(predicate::str::contains(" grid.txt "));
}

#[test]
fn malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "bad.txt", "1\n2\nthree\n");

    headless(&[&bad])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not convert 'three'"));
}

#[test]
fn ragged_file_fails_for_line_plots() {
    let dir = TempDir::new().unwrap();
    let ragged = write(&dir, "ragged.txt", "1 2\n3\n");

    headless(&[&ragged])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2 columns, found 1"));
}

#[test]
fn files_are_required() {
    txtplot().arg("--headless").assert().failure();
}

#[test]
fn unknown_kind_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "1\n");

    headless(&[&a]).args(["--kind", "scatter"]).assert().failure();
}

#[test]
fn log_file_is_written() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "1\n2\n");
    let log = dir.path().join("run.log");

    headless(&[&a]).arg("--log").arg(&log).assert().success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting txtplot"));
}

#[test]
fn every_file_gets_a_panel_when_crowded() {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = (0..10)
        .map(|i| write(&dir, &format!("f{i}.txt"), "1\n2\n3\n"))
        .collect();

    let output = txtplot()
        .args(["--headless", "--width", "80", "--height", "40"])
        .args(&files)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut last = 0;
    for i in 0..10 {
        let at = stdout
            .find(&format!(" f{i}.txt "))
            .unwrap_or_else(|| panic!("panel f{i}.txt missing"));
        assert!(at >= last);
        last = at;
    }
}

#[test]
fn longer_lines_are_truncated_for_pcolor_only() {
    let dir = TempDir::new().unwrap();
    let wide = write(&dir, "wide.txt", "1 2\n3 4 5\n");

    headless(&[&wide])
        .args(["--kind", "pcolor"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" wide.txt "));

    headless(&[&wide])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2 columns, found 3"));
}

#[test]
fn headless_pcolor_shades_by_value() {
    let dir = TempDir::new().unwrap();
    let grid = write(&dir, "holes.txt", "0 1 2\n3 nan 5\n6 7 8\n");

    headless(&[&grid])
        .args(["--kind", "pcolor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("░"))
        .stdout(predicate::str::contains("▓"))
        .stdout(predicate::str::contains("·"));
}
