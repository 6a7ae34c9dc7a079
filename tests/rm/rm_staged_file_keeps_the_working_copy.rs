use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn rm_staged_file_keeps_the_working_copy(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("draft.txt"), "draft".to_string()));
    run_gitlet_command(dir, &["add", "draft.txt"]).assert().success();

    run_gitlet_command(dir, &["rm", "draft.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("draft.txt")).as_deref(), Some("draft"));
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"));

    Ok(())
}
