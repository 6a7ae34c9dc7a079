use crate::common::command::{
    committed_repository_dir, get_head_commit_sha, log_commit_ids, run_gitlet_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reinit_is_reported_without_changes(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_sha(dir)?;
    let history = log_commit_ids(dir);

    run_gitlet_command(dir, &["init"])
        .assert()
        .success()
        .stdout("A Gitlet version-control system already exists in the current directory.\n");

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(log_commit_ids(dir), history);

    Ok(())
}
