use crate::common::command::{commit_files, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_commits_by_message(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = commit_files(dir, "Same message", &[("1.txt", "one")]);
    commit_files(dir, "Other message", &[("2.txt", "two")]);
    let third = commit_files(dir, "Same message", &[("3.txt", "three")]);

    let mut expected = vec![first, third];
    expected.sort();

    run_gitlet_command(dir, &["find", "Same message"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", expected[0], expected[1]));

    Ok(())
}

#[rstest]
fn find_includes_the_initial_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["find", "initial commit"])
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"^[0-9a-f]{40}\n$")?);

    Ok(())
}

#[rstest]
#[case::unknown("No such message")]
#[case::prefix_only("Same")]
fn find_unknown_message_is_reported(
    init_repository_dir: TempDir,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_files(dir, "Same message", &[("1.txt", "one")]);

    run_gitlet_command(dir, &["find", message])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");

    Ok(())
}
