use crate::common::command::{
    get_head_commit_sha, log_commit_ids, repository_with_multiple_commits, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::full_id(40)]
#[case::abbreviated_id(6)]
fn reset_to_an_earlier_commit(
    repository_with_multiple_commits: TempDir,
    #[case] id_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let history = log_commit_ids(dir);
    let first = history[2].clone();
    write_file(FileSpec::new(dir.join("file1.txt"), "content 2".to_string()));
    run_gitlet_command(dir, &["add", "file1.txt"]).assert().success();

    run_gitlet_command(dir, &["reset", &first[..id_length]])
        .assert()
        .success()
        .stdout("");

    assert_eq!(get_head_commit_sha(dir)?, first);
    assert_eq!(log_commit_ids(dir), history[2..].to_vec());
    assert_eq!(read_file(&dir.join("file1.txt")).as_deref(), Some("content 1"));
    assert!(!dir.join("file2.txt").exists());
    assert!(!dir.join("file3.txt").exists());
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "=== Branches ===\n*master\n\n=== Staged Files ===\n\n",
        ));

    Ok(())
}

#[rstest]
fn reset_forward_again_restores_later_files(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let history = log_commit_ids(dir);

    run_gitlet_command(dir, &["reset", &history[2]]).assert().success();
    run_gitlet_command(dir, &["reset", &history[0]]).assert().success();

    assert_eq!(log_commit_ids(dir), history);
    assert_eq!(read_file(&dir.join("file3.txt")).as_deref(), Some("content 3"));

    Ok(())
}
