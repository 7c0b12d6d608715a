use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;
#[test]
fn cli_version() {
    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("dirdoc"));
}
#[test]
fn cli_writes_output_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("app.py"), "import os\n").unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/gen.py"), "x = 1\n").unwrap();
    let output = dir.path().join("docs.md");

    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.arg("--root")
        .arg(dir.path())
        .args(["--ignore-dir", "build"])
        .arg("--output")
        .arg(&output);
    cmd.assert().success();

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("# Project Documentation\n"));
    assert!(doc.contains("# app.py\n\n```python\nimport os\n"));
    assert!(!doc.contains("gen.py"));
    assert!(!doc.contains("docs.md"));
}
#[test]
fn cli_stdout_and_ignore_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "kept").unwrap();
    fs::write(dir.path().join("drop.txt"), "dropped").unwrap();

    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.arg("--root")
        .arg(dir.path())
        .args(["--ignore-file", "drop.txt", "--output", "-"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# keep.txt\n\n```text\nkept\n```"))
        .stdout(predicate::str::contains("drop.txt").not());
}
#[test]
fn cli_binary_file_is_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.md"), "fine").unwrap();
    fs::write(dir.path().join("blob.dat"), [0u8, 159, 146, 150]).unwrap();

    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.arg("--root").arg(dir.path()).args(["-o", "-"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("```markdown\nfine\n```"))
        .stdout(predicate::str::contains("# blob.dat").not());
}
#[test]
fn cli_missing_root_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.arg("--root")
        .arg(dir.path().join("missing"))
        .arg("--output")
        .arg(dir.path().join("out.md"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
#[test]
fn cli_rust_log_enables_debug_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "1").unwrap();

    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.env("RUST_LOG", "debug")
        .arg("--root")
        .arg(dir.path())
        .args(["-o", "-"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Documented 1 files"))
        .stderr(predicate::str::contains("\x1b[").not());
}
#[test]
fn cli_quiet_without_rust_log() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "1").unwrap();

    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--root")
        .arg(dir.path())
        .args(["-o", "-"]);
    cmd.assert().success().stderr(predicate::str::is_empty());
}
#[cfg(unix)]
#[test]
fn cli_read_error_is_logged_and_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.py"), "x = 1\n").unwrap();
    std::os::unix::fs::symlink(dir.path().join("missing.txt"), dir.path().join("dangling.txt"))
        .unwrap();

    let mut cmd = Command::cargo_bin("dirdoc").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--root")
        .arg(dir.path())
        .args(["-o", "-"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# ok.py\n\n```python\nx = 1\n"))
        .stdout(predicate::str::contains("# dangling.txt").not())
        .stderr(predicate::str::contains("Error reading"))
        .stderr(predicate::function(|err: &str| {
            err.matches("dangling.txt").count() == 1
        }));
}
