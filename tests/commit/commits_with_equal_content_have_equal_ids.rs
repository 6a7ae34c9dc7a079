use crate::common::command::{commit_files, init_repository_dir, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::{assert_eq, assert_ne};
use rstest::rstest;

#[rstest]
fn commits_with_equal_content_have_equal_ids(
    #[from(init_repository_dir)] first: TempDir,
    #[from(repository_dir)] second: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(second.path(), &["init"]).assert().success();
    let files = [("1.txt", "one"), ("a/2.txt", "two")];

    let first_id = commit_files(first.path(), "Same snapshot", &files);
    let second_id = commit_files(second.path(), "Same snapshot", &files);

    assert_eq!(first_id, second_id);

    Ok(())
}

#[rstest]
fn commits_with_different_messages_have_different_ids(
    #[from(init_repository_dir)] first: TempDir,
    #[from(repository_dir)] second: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(second.path(), &["init"]).assert().success();
    let files = [("1.txt", "one")];

    let first_id = commit_files(first.path(), "One message", &files);
    let second_id = commit_files(second.path(), "Another message", &files);

    assert_ne!(first_id, second_id);

    Ok(())
}
