use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(dir.join("a").join("b").join("3.txt"), "three".to_string()));

    run_gitlet_command(dir, &["add", "1.txt"])
        .assert()
        .success()
        .stdout("");
    run_gitlet_command(dir, &["add", "./a/b/3.txt"])
        .assert()
        .success()
        .stdout("");

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n1.txt\na/b/3.txt\n\n",
        ))
        .stdout(predicate::str::contains("=== Untracked Files ===\n\n"));

    Ok(())
}

#[rstest]
fn adding_the_same_file_twice_keeps_the_latest_content(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let file = dir.join("notes.txt");

    write_file(FileSpec::new(file.clone(), "draft".to_string()));
    run_gitlet_command(dir, &["add", "notes.txt"]).assert().success();
    write_file(FileSpec::new(file.clone(), "final".to_string()));
    run_gitlet_command(dir, &["add", "notes.txt"]).assert().success();

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nnotes.txt\n\n"))
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n",
        ));

    Ok(())
}
