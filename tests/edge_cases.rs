//! Edge case tests for dls


use assert_cmd::Command;
use harness::{TestTree, run_dls};
use predicates::prelude::*;

fn dls() -> Command {
    Command::cargo_bin("dls").expect("binary should build")
}

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();

    dls()
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name (files: 0, dirs: 0)"));
}

#[test]
fn test_prefix_quirk_end_to_end() {
    // "developer" starts with "dev" and is dropped; a nested "dev" is not.
    let tree = TestTree::new();
    tree.add_file("developer/notes.txt", "x");
    tree.add_file("a/dev/inner.txt", "x");

    dls()
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("developer").not())
        .stdout(predicate::str::contains("a/dev/"))
        .stdout(predicate::str::contains("a/dev/inner.txt"));
}

#[test]
fn test_custom_ignore_names() {
    let tree = TestTree::new();
    tree.add_file("tmpfiles/x.txt", "x");
    tree.add_file("keep.txt", "x");

    dls()
        .current_dir(tree.path())
        .args(["-I", "tmp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tmpfiles").not())
        .stdout(predicate::str::contains("keep.txt"));
}

#[test]
fn test_custom_ignore_is_bypassed_by_all() {
    let tree = TestTree::new();
    tree.add_file("tmpfiles/x.txt", "x");

    dls()
        .current_dir(tree.path())
        .args(["-I", "tmp", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tmpfiles/x.txt"));
}

#[test]
fn test_directory_paths_carry_trailing_separator() {
    let tree = TestTree::new();
    tree.add_file("sub/inner.txt", "x");

    let (stdout, _stderr, success) = run_dls(tree.path(), &[]);
    assert!(success);
    assert!(
        stdout.lines().any(|l| l.ends_with("sub/") && l.contains("dir")),
        "directory row should end with a separator: {}",
        stdout
    );
}

#[test]
fn test_output_is_idempotent() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "aa");
    tree.add_file("b/c.txt", "cc");

    let (first, _, ok1) = run_dls(tree.path(), &["-t"]);
    let (second, _, ok2) = run_dls(tree.path(), &["-t"]);
    assert!(ok1 && ok2);
    assert_eq!(first, second, "two walks of a static tree must agree");
}

#[test]
fn test_json_for_empty_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_dls(tree.path(), &["--json"]);
    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(report["entries"].as_array().map(|a| a.len()), Some(0));
    assert_eq!(report["errors"].as_array().map(|a| a.len()), Some(0));
    assert_eq!(report["stats"]["total_file_size"], 0);
}

#[cfg(unix)]
#[test]
fn test_unreadable_subtree_is_reported_not_fatal() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    tree.add_file("ok.txt", "x");
    let locked = tree.add_dir("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Permission bits do not apply to root; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        let _ = fs::set_permissions(&locked, fs::Permissions::from_mode(0o755));
        return;
    }

    let (stdout, _stderr, success) = run_dls(tree.path(), &["-a", "-e"]);
    let _ = fs::set_permissions(&locked, fs::Permissions::from_mode(0o755));

    assert!(success, "per-node errors must not fail the run");
    assert!(stdout.contains("Errors: 1"), "error table: {}", stdout);
    assert!(stdout.contains("locked"), "error names the subtree");
    assert!(stdout.contains("ok.txt"), "siblings still listed");
}
