use crate::common::command::{
    commit_files, committed_repository_dir, get_head_commit_sha, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::unknown_branch(&["checkout", "ghost"], "No such branch exists.")]
#[case::current_branch(&["checkout", "master"], "No need to checkout the current branch.")]
#[case::file_not_in_head(&["checkout", "--", "missing.txt"], "File does not exist in that commit.")]
#[case::unknown_commit(
    &["checkout", "0000000000", "--", "1.txt"],
    "No commit with that id exists."
)]
#[case::missing_operand(&["checkout"], "Incorrect operands.")]
#[case::extra_operand(&["checkout", "master", "1.txt"], "Incorrect operands.")]
fn checkout_is_rejected_without_changes(
    committed_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, args)
        .assert()
        .success()
        .stdout(format!("{message}\n"));

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one"));

    Ok(())
}

#[rstest]
fn checkout_file_missing_from_an_earlier_commit_is_reported(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let earlier = get_head_commit_sha(dir)?;
    commit_files(dir, "Add 4.txt", &[("4.txt", "four")]);

    run_gitlet_command(dir, &["checkout", &earlier, "--", "4.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");

    assert_eq!(read_file(&dir.join("4.txt")).as_deref(), Some("four"));

    Ok(())
}

#[rstest]
fn untracked_files_block_branch_checkout(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_files(dir, "Change 1.txt", &[("1.txt", "uno")]);
    write_file(FileSpec::new(dir.join("stray.txt"), "precious".to_string()));
    let head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["checkout", "other"])
        .assert()
        .success()
        .stdout(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        );

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("uno"));
    assert_eq!(read_file(&dir.join("stray.txt")).as_deref(), Some("precious"));
    assert!(
        std::fs::read_to_string(dir.join(".gitlet").join("HEAD"))?.contains("refs/heads/master")
    );

    Ok(())
}
