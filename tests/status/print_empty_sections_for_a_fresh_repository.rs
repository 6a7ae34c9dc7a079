use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_empty_sections_for_a_fresh_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*master\n\n\
             === Staged Files ===\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n\
             === Untracked Files ===\n\n",
        );

    Ok(())
}
