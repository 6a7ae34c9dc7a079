use crate::common::command::{get_head_commit_sha, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let dir_absolute_path = dir.canonicalize()?.display().to_string();

    run_gitlet_command(dir, &["init"])
        .assert()
        .success()
        .stdout(format!(
            "Initialized empty Gitlet repository in {dir_absolute_path}\n"
        ));

    assert!(dir.join(".gitlet").is_dir());
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet").join("HEAD"))?.trim(),
        "ref: refs/heads/master"
    );

    let root = get_head_commit_sha(dir)?;
    run_gitlet_command(dir, &["log"]).assert().success().stdout(format!(
        "===\ncommit {root}\nDate: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n"
    ));

    Ok(())
}

#[rstest]
fn initial_commits_are_identical_across_repositories(
    #[from(repository_dir)] first: TempDir,
    #[from(repository_dir)] second: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(first.path(), &["init"]).assert().success();
    run_gitlet_command(second.path(), &["init"]).assert().success();

    assert_eq!(
        get_head_commit_sha(first.path())?,
        get_head_commit_sha(second.path())?
    );

    Ok(())
}
