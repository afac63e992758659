use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Command running inside `temp_dir` with user-level config lookups pointed
/// at the temp dir as well.
fn batchren(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("batchren").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn files_dir(temp_dir: &TempDir, names: &[&str]) -> assert_fs::fixture::ChildPath {
    let dir = temp_dir.child("files");
    dir.create_dir_all().unwrap();
    for name in names {
        dir.child(name).write_str(name).unwrap();
    }
    dir
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("batchren").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch rename the files in a directory",
        ));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("batchren").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("batchren"));
}

#[test]
fn test_action_is_required() {
    let temp_dir = TempDir::new().unwrap();
    files_dir(&temp_dir, &["a.txt"]);
    batchren(&temp_dir)
        .arg("files")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--action"));
}

#[test]
fn test_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    batchren(&temp_dir)
        .args(["missing", "--action", "prefix", "--prefix", "x_"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("directory not found"));
}

#[test]
fn test_replace_without_new_renames_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["old_a.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "replace", "--old", "old"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires --old and --new"));
    dir.child("old_a.txt").assert(predicate::path::exists());
}

#[test]
fn test_replace_with_empty_new_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["old_a.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "replace", "--old", "old", "--new", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-empty --new"));
    dir.child("old_a.txt").assert(predicate::path::exists());
}

#[test]
fn test_folder_that_is_a_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("plain.txt").write_str("x").unwrap();
    batchren(&temp_dir)
        .args(["plain.txt", "--action", "prefix", "--prefix", "x_"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("directory not found"));
    temp_dir.child("plain.txt").assert(predicate::path::exists());
}

#[test]
fn test_empty_old_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["a.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "remove", "--old", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("search text must not be empty"));
    dir.child("a.txt").assert(predicate::path::exists());
}

#[test]
fn test_prefix_action_with_collision() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["notes.txt", "2024_notes_bak.txt"]);
    batchren(&temp_dir)
        .args([
            "files", "--action", "prefix", "--prefix", "2024_", "--suffix", "_bak",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ Renamed: notes.txt -> 2024_notes_bak_1.txt",
        ))
        .stdout(predicate::str::contains("2 renamed, 0 skipped, 0 failed"));
    dir.child("2024_notes_bak_1.txt")
        .assert(predicate::str::contains("notes.txt"));
}

#[test]
fn test_sequence_action_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["b.jpg", "a.jpg", "c.png"]);
    let output = batchren(&temp_dir)
        .args(["files", "--action", "sequence", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "sequential-number");
    assert_eq!(json["summary"]["renamed"], 3);
    assert_eq!(json["outcomes"][0]["original_name"], "a.jpg");
    assert_eq!(json["outcomes"][0]["final_name"], "file_001.jpg");
    assert_eq!(json["outcomes"][2]["final_name"], "file_003.png");
    dir.child("file_002.jpg").assert(predicate::str::contains("b.jpg"));
}

#[test]
fn test_sequence_clash_is_reported_as_failure() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["a.txt", "x_1.txt"]);
    batchren(&temp_dir)
        .args([
            "files", "--action", "sequence", "--prefix", "x_", "--digits", "1",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ Failed to rename a.txt -> x_1.txt"));
    dir.child("a.txt").assert(predicate::path::exists());
    dir.child("x_1.txt").assert("x_1.txt");
}

#[test]
fn test_case_action() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["report.TXT"]);
    batchren(&temp_dir)
        .args(["files", "--action", "case", "--case-type", "upper"])
        .assert()
        .success();
    dir.child("REPORT.TXT").assert(predicate::path::exists());
}

#[test]
fn test_case_action_requires_case_type() {
    let temp_dir = TempDir::new().unwrap();
    files_dir(&temp_dir, &["report.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "case"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--case-type"));
}

#[test]
fn test_clean_action() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["a!! b??.png", "c#d.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a!! b??.png -> a b.png"));
    dir.child("a b.png").assert(predicate::path::exists());
    dir.child("cd.txt").assert(predicate::path::exists());
}

#[test]
fn test_remove_action_case_insensitive_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["TEMP_a.txt", "temp_b.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "remove", "--old", "temp_"])
        .assert()
        .success();
    dir.child("a.txt").assert(predicate::path::exists());
    dir.child("b.txt").assert(predicate::path::exists());
}

#[test]
fn test_quiet_suppresses_summary() {
    let temp_dir = TempDir::new().unwrap();
    files_dir(&temp_dir, &["a.txt"]);
    batchren(&temp_dir)
        .args(["files", "--action", "prefix", "--prefix", "x_", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_sets_sequence_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let dir = files_dir(&temp_dir, &["a.jpg"]);
    temp_dir
        .child(".batchren/config.toml")
        .write_str("[defaults]\nsequence_prefix = \"img_\"\ndigit_width = 2\n")
        .unwrap();
    batchren(&temp_dir)
        .args(["files", "--action", "sequence"])
        .assert()
        .success();
    dir.child("img_01.jpg").assert(predicate::path::exists());
}
