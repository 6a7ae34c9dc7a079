use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// A repository whose master branch holds `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();
    commit_files(
        dir,
        "Initial files",
        &[("1.txt", "one"), ("a/2.txt", "two"), ("a/b/3.txt", "three")],
    );

    init_repository_dir
}

/// A repository with three commits on master, each adding one file
#[fixture]
pub fn repository_with_multiple_commits(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();
    commit_files(dir, "First commit", &[("file1.txt", "content 1")]);
    commit_files(dir, "Second commit", &[("file2.txt", "content 2")]);
    commit_files(dir, "Third commit", &[("file3.txt", "content 3")]);

    init_repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlet_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_gitlet_command(dir, &["commit", message]);
    cmd.env("GITLET_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Write, stage and commit the given files, returning the new head commit id
pub fn commit_files(dir: &Path, message: &str, files: &[(&str, &str)]) -> String {
    for (path, content) in files {
        write_file(FileSpec::new(dir.join(path), content.to_string()));
        run_gitlet_command(dir, &["add", path]).assert().success();
    }

    gitlet_commit(dir, message).assert().success();

    get_head_commit_sha(dir).expect("Failed to read HEAD")
}

/// Resolve HEAD through the active branch
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(".gitlet").join("HEAD"))?;
    let ref_path = head_content
        .trim()
        .strip_prefix("ref: ")
        .ok_or("HEAD is not a symbolic ref")?;

    let commit_sha = std::fs::read_to_string(dir.join(".gitlet").join(ref_path))?;
    Ok(commit_sha.trim().to_string())
}

/// Commit ids in the order `log` prints them
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    let output = run_gitlet_command(dir, &["log"])
        .output()
        .expect("Failed to run log");

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}
