//! End-to-end runs of the `sortnet` binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../networks")
        .join(name)
}

fn sortnet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sortnet"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_check_sample_file() {
    let path = sample("5-input.cn");
    let output = sortnet(&["-i", path.to_str().unwrap(), "--check"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n");
}

#[test]
fn test_check_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sortnet"))
        .arg("-c")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0:1,1:2\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "false\n");
}

#[test]
fn test_check_json_report() {
    let path = sample("4-input.cn");
    let output = sortnet(&["-i", path.to_str().unwrap(), "-c", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["is_sorting_network"], true);
    assert_eq!(report["wire_count"], 4);
    assert_eq!(report["comparator_count"], 5);
    assert!(report["unsorted_output"].is_null());
}

#[test]
fn test_actions_run_in_order() {
    let path = sample("4-input.cn");
    let output = sortnet(&[
        "-i",
        path.to_str().unwrap(),
        "--sort",
        "4,-2,9,0",
        "--print",
        "--check",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true\n0:1,2:3\n0:2,1:3\n1:2\n-2,0,4,9\n");
}

#[test]
fn test_svg_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("net.svg");
    let path = sample("4-input.cn");
    let output = sortnet(&["-i", path.to_str().unwrap(), "--svg", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_svg_to_stdout() {
    let path = sample("4-input.cn");
    let output = sortnet(&["-i", path.to_str().unwrap(), "-s"]);
    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with("</svg>"));
}

#[test]
fn test_invalid_network_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.cn");
    fs::write(&path, "0:1,2").unwrap();

    let output = sortnet(&["-i", path.to_str().unwrap(), "-c"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_sort_length_mismatch_fails() {
    let path = sample("4-input.cn");
    let output = sortnet(&["-i", path.to_str().unwrap(), "--sort", "1,2,3"]);
    assert!(!output.status.success());
}
