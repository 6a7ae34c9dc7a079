use crate::common::command::{repository_with_multiple_commits, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn global_log_lists_the_same_history(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();

    let log = run_gitlet_command(dir, &["log"]).output()?;
    let global_log = run_gitlet_command(dir, &["global-log"]).output()?;

    assert!(global_log.status.success());
    assert_eq!(
        String::from_utf8(global_log.stdout)?,
        String::from_utf8(log.stdout)?
    );

    Ok(())
}
