//! Command-line behavior: exit status, rejection messages, output formats.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use u_srtf::ingest::parse_json;

/// Input file under the temp dir, removed on drop.
struct InputFile(PathBuf);

impl InputFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("u-srtf-{}-{name}.txt", std::process::id()));
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for InputFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn u_srtf(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_u-srtf"))
        .args(args)
        .output()
        .unwrap()
}

fn run_file(name: &str, contents: &str, extra: &[&str]) -> Output {
    let file = InputFile::new(name, contents);
    let path = file.0.to_str().unwrap();
    let mut args = vec!["run", path];
    args.extend_from_slice(extra);
    u_srtf(&args)
}

#[test]
fn test_run_rejects_invalid_row() {
    let out = run_file("invalid-row", "1\n1 -1 0\n", &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid arrival time -1"), "{stderr}");
    assert!(stderr.contains("invalid burst time 0"), "{stderr}");
}

#[test]
fn test_run_rejects_zero_count() {
    let out = run_file("zero-count", "0\n", &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Invalid process count: 0"), "{stderr}");
}

#[test]
fn test_run_canonical_text() {
    let out = run_file("canonical", "4\n1 0 8\n2 1 4\n3 2 9\n4 3 5\n", &[]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Avg waiting time:    6.50"), "{stdout}");
    assert!(stdout.contains("Avg turnaround time: 13.00"), "{stdout}");
}

#[test]
fn test_run_canonical_json_output() {
    let out = run_file(
        "canonical-json",
        "4\n1 0 8\n2 1 4\n3 2 9\n4 3 5\n",
        &["--format", "json"],
    );
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let ids: Vec<i64> = value["completion_order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 4, 1, 3]);
    assert_eq!(value["report"]["avg_turnaround"].as_f64(), Some(13.0));
}

#[test]
fn test_generate_json_reads_back() {
    let out = u_srtf(&["generate", "-n", "5", "--seed", "3", "--format", "json"]);
    assert!(out.status.success());

    let set = parse_json(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(set.len(), 5);
}

#[test]
fn test_generate_rejects_show_idle_without_simulate() {
    let out = u_srtf(&["generate", "-n", "3", "--show-idle"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("--simulate"), "{stderr}");
}
