use crate::common::command::{commit_files, committed_repository_dir, get_head_commit_sha, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::{assert_eq, assert_ne};
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("feature/login")]
#[case("bugfix-1.0")]
#[case("fix_42")]
fn create_branch_successfully(
    committed_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_gitlet_command(dir, &["branch", name])
        .assert()
        .success()
        .stdout("");

    let branch_file = dir.join(".gitlet").join("refs").join("heads").join(name);
    assert_eq!(std::fs::read_to_string(branch_file)?.trim(), head);
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "=== Branches ===\n{name}\n*master\n\n"
        )));

    Ok(())
}

#[rstest]
fn new_branches_do_not_follow_later_commits(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let base = get_head_commit_sha(dir)?;
    run_gitlet_command(dir, &["branch", "feature"]).assert().success();

    let master = commit_files(dir, "On master", &[("1.txt", "uno")]);

    let feature = std::fs::read_to_string(
        dir.join(".gitlet").join("refs").join("heads").join("feature"),
    )?;
    assert_eq!(feature.trim(), base);
    assert_ne!(master, base);

    Ok(())
}
