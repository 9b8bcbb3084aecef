//! End-to-end tests for the file filtering pipeline

use std::fs;

use logsift::{filter_file, ExclusionPatterns};

fn write_input(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.log");
    fs::write(&path, text).expect("write input");
    path
}

#[test]
fn test_kept_lines_preserve_content_and_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(
        &dir,
        "first kept line\n\
         INFO: dropped\n\
         second kept line\n\
         SEVERE: window opens\n\
         swallowed\n\
         [test] window closes\n\
         third kept line\n",
    );
    let output = dir.path().join("output.log");

    filter_file(&input, &output, ExclusionPatterns::new("Jan 5")).expect("run");

    let out = fs::read_to_string(&output).expect("read output");
    let input_text = fs::read_to_string(&input).expect("read input");

    // Every output line existed in the input, unmodified, in relative order.
    let input_lines: Vec<&str> = input_text.lines().collect();
    let mut cursor = 0;
    for line in out.lines() {
        let pos = input_lines[cursor..]
            .iter()
            .position(|l| *l == line)
            .expect("output line must come from input, in order");
        cursor += pos + 1;
    }

    assert_eq!(
        out,
        "first kept line\nsecond kept line\n[test] window closes\nthird kept line\n"
    );
}

#[test]
fn test_no_info_line_survives() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(
        &dir,
        "INFO: one\nplain\nprefix INFO: two\nSEVERE: x\nINFO: three\n[test]\n",
    );
    let output = dir.path().join("output.log");

    filter_file(&input, &output, ExclusionPatterns::new("Jan 5")).expect("run");

    let out = fs::read_to_string(&output).expect("read output");
    assert!(!out.contains("INFO:"));
    assert!(out.contains("plain"));
}

#[test]
fn test_no_today_line_survives() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, "Mar 7, 2024 entry\nMar 17, 2024 entry\n");
    let output = dir.path().join("output.log");

    filter_file(&input, &output, ExclusionPatterns::new("Mar 7")).expect("run");

    let out = fs::read_to_string(&output).expect("read output");
    // "Mar 17" does not contain the substring "Mar 7".
    assert_eq!(out, "Mar 17, 2024 entry\n");
}

#[test]
fn test_two_runs_produce_identical_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(
        &dir,
        "alpha\nSEVERE: broke\nhidden\n[test] back\nomega\nINFO: noise\n",
    );
    let out_a = dir.path().join("a.log");
    let out_b = dir.path().join("b.log");

    let patterns = ExclusionPatterns::for_today();
    filter_file(&input, &out_a, patterns.clone()).expect("first run");
    filter_file(&input, &out_b, patterns).expect("second run");

    assert_eq!(
        fs::read_to_string(&out_a).expect("read a"),
        fs::read_to_string(&out_b).expect("read b")
    );
}

#[test]
fn test_output_is_truncated_on_rerun() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, "only line\n");
    let output = dir.path().join("output.log");
    fs::write(&output, "stale content from an earlier run\n").expect("seed output");

    filter_file(&input, &output, ExclusionPatterns::new("Jan 5")).expect("run");

    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "only line\n"
    );
}

#[test]
fn test_missing_input_leaves_no_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("nope.log");
    let output = dir.path().join("output.log");

    let result = filter_file(&input, &output, ExclusionPatterns::new("Jan 5"));
    assert!(result.is_err());
    assert!(!output.exists());
}
