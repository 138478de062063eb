//! CLI integration tests for workshop-migrate
//!
//! These tests drive the real binary against a legacy tree laid out in a
//! temp directory and check the migrated workshop tree it leaves behind.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the workshop-migrate binary
fn migrate_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("workshop-migrate"))
}

const INSTRUCTIONS: &str = "\
# Count Clicks

# Background

Some background text.

# Exercise

Production deploys:
- [Exercise](https://example.com/exercise)
- [Final](https://example.com/final)

Click the button and render the count.

# Extra Credit 1 \u{1f680} Add a reset

Reset the count to zero.
";

/// Lays out a legacy project with exercise 5 in it
fn setup_legacy_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let exercise = dir.path().join("src/exercise");
    let final_dir = dir.path().join("src/final");
    fs::create_dir_all(&exercise).unwrap();
    fs::create_dir_all(&final_dir).unwrap();

    fs::write(exercise.join("05.md"), INSTRUCTIONS).unwrap();
    fs::write(exercise.join("05.tsx"), "export const playground = 1\n").unwrap();
    fs::write(final_dir.join("05.tsx"), "export const solution = 1\n").unwrap();
    fs::write(final_dir.join("05-01.tsx"), "export const extra = 1\n").unwrap();

    dir
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

// =============================================================================
// End-to-end migration
// =============================================================================

#[test]
fn test_migrate_exercise_builds_expected_tree() {
    let dir = setup_legacy_project();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated exercise 05"));

    let root = dir.path().join("exercises/05.count-clicks");
    assert!(root.is_dir());
    assert!(root.join("README.mdx").is_file());
    assert!(root.join("01.problem/index.tsx").is_file());
    assert!(root.join("01.problem/README.mdx").is_file());
    assert!(root.join("01.solution/index.tsx").is_file());
    assert!(root.join("02.problem/index.tsx").is_file());
    assert!(root.join("02.solution/index.tsx").is_file());
}

#[test]
fn test_solution_content_is_propagated_forward() {
    let dir = setup_legacy_project();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .success();

    let root = dir.path().join("exercises/05.count-clicks");

    // step 2 starts where step 1's solution ended
    assert_eq!(
        read(&root, "02.problem/index.tsx"),
        "export const solution = 1\n"
    );
    // the source of the copy stays put
    assert_eq!(
        read(&root, "01.solution/index.tsx"),
        "export const solution = 1\n"
    );
    // no step beyond the highest discovered one
    assert!(!root.join("03.problem").exists());
}

#[test]
fn test_instructions_are_split_per_step() {
    let dir = setup_legacy_project();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .success();

    let root = dir.path().join("exercises/05.count-clicks");

    let step1 = read(&root, "01.problem/README.mdx");
    assert!(step1.starts_with("# Count Clicks\n"));
    assert!(step1.contains("Click the button and render the count."));
    assert!(!step1.contains("Production deploy"));
    assert!(!step1.contains("- [Exercise"));

    assert_eq!(read(&root, "01.solution/README.mdx"), "# Count Clicks\n");

    let step2 = read(&root, "02.problem/README.mdx");
    assert!(step2.starts_with("# Add A Reset\n"));
    assert!(step2.contains("Reset the count to zero."));

    // the root README becomes the background description
    let root_readme = read(&root, "README.mdx");
    assert!(root_readme.starts_with("# Count Clicks\n"));
    assert!(root_readme.contains("Some background text."));
    assert!(!root_readme.contains("Click the button"));
}

#[test]
fn test_legacy_files_are_consumed() {
    let dir = setup_legacy_project();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .success();

    assert!(!dir.path().join("src/exercise/05.md").exists());
    assert!(!dir.path().join("src/exercise/05.tsx").exists());
    assert!(!dir.path().join("src/final/05.tsx").exists());
    assert!(!dir.path().join("src/final/05-01.tsx").exists());
}

#[test]
fn test_creation_notices_are_printed() {
    let dir = setup_legacy_project();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"));
}

// =============================================================================
// Recoverable and fatal failures
// =============================================================================

#[test]
fn test_missing_instructions_falls_back_to_untitled() {
    let dir = TempDir::new().unwrap();
    let exercise = dir.path().join("src/exercise");
    fs::create_dir_all(&exercise).unwrap();
    fs::write(exercise.join("05.tsx"), "playground\n").unwrap();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No instructions document"));

    let root = dir.path().join("exercises/05.untitled");
    assert!(root.is_dir());
    assert!(root.join("01.problem/index.tsx").is_file());
    assert!(!root.join("README.mdx").exists());
}

#[test]
fn test_missing_legacy_tree_is_fatal() {
    let dir = TempDir::new().unwrap();

    migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["migrate-exercise", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Legacy exercise directory"));
}

#[test]
fn test_missing_path_option_is_rejected() {
    migrate_cmd()
        .env_remove("WORKSHOP_ROOT")
        .args(["migrate-exercise", "5"])
        .assert()
        .failure();
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn test_json_format_emits_summary() {
    let dir = setup_legacy_project();

    let assert = migrate_cmd()
        .args(["-p"])
        .arg(dir.path())
        .args(["-f", "json", "migrate-exercise", "5"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary_line = stdout
        .lines()
        .last()
        .expect("expected at least one stdout line");
    let summary: serde_json::Value = serde_json::from_str(summary_line).unwrap();

    assert_eq!(summary["title"], "Count Clicks");
    assert_eq!(summary["steps"], 2);
    assert_eq!(summary["propagated"], 1);
    assert_eq!(summary["failed_writes"], 0);
}
