use crate::common::command::{committed_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_unknown_file_is_reported(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("stray.txt"), "untracked".to_string()));

    run_gitlet_command(dir, &["rm", "stray.txt"])
        .assert()
        .success()
        .stdout("No reason to remove the file.\n");

    assert!(dir.join("stray.txt").exists());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"))
        .stdout(predicate::str::contains("=== Untracked Files ===\nstray.txt\n\n"));

    Ok(())
}
