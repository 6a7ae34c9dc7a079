use crate::common::command::{committed_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_content_equal_to_head_unstages_the_file(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));

    run_gitlet_command(dir, &["commit", "nothing new"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");

    Ok(())
}

#[rstest]
fn adding_a_file_pending_removal_restores_tracking(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();

    run_gitlet_command(dir, &["rm", "1.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_gitlet_command(dir, &["add", "1.txt"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"))
        .stdout(predicate::str::contains("=== Untracked Files ===\n\n"));

    Ok(())
}
