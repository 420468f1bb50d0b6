use assert_cmd::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

#[test]
fn run_all_demos() {
    let examples_dir = Path::new("examples");
    let entries = fs::read_dir(examples_dir).expect("read examples dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("example name")
            .to_string();
        found_any = true;
        Command::new("cargo")
            .arg("run")
            .arg("--example")
            .arg(&name)
            .assert()
            .success();
    }
    assert!(found_any, "no examples found to run");
}

#[test]
fn stress_test_accepts_symbol_and_timeframe() {
    let out = Command::new("cargo")
        .args(["run", "--example", "01_stress_test", "--", "GME", "1h"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).into_owned();
    assert!(stdout.contains("Stress test: GME (1h)"));
    assert!(stdout.contains("Gaps repaired:"));
}

#[test]
fn stress_test_rejects_unknown_timeframe() {
    Command::new("cargo")
        .args(["run", "--example", "01_stress_test", "--", "GME", "2d"])
        .assert()
        .failure();
}
