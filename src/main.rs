use anyhow::Result;
use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use gitlet::areas::repository::Repository;
use gitlet::artifacts::checkout::target::CheckoutTarget;
use gitlet::config::Config;
use gitlet::errors::{RepositoryError, repository_error};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version-control system",
    long_about = "Gitlet records snapshots of the current directory as a chain of commits, \
    supports named branches and can restore any recorded snapshot. \
    All state lives in the .gitlet directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .gitlet directory in the current directory, \
        with an initial commit on the master branch."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes as a new commit",
        long_about = "This command creates a new commit on the active branch from the staged \
        additions and removals. It requires a non-empty commit message."
    )]
    Commit {
        #[arg(index = 1, allow_hyphen_values = true, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "rm", about = "Unstage a file or stage its removal")]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the active branch")]
    Log,
    #[command(name = "global-log", about = "Show the history of every commit")]
    GlobalLog,
    #[command(name = "find", about = "List the commits with the given message")]
    Find {
        #[arg(index = 1, allow_hyphen_values = true, help = "The exact commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "checkout <branch> switches to a branch; checkout -- <file> restores a file \
        from the current commit; checkout <commit-id> -- <file> restores it from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch, or the commit to restore from")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Vec<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the active branch to a commit and check it out")]
    Reset {
        #[arg(index = 1)]
        commit_id: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn parse_cli() -> Result<Cli> {
    Cli::try_parse().map_err(|error| -> anyhow::Error {
        match error.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => error.exit(),
            ClapErrorKind::MissingSubcommand => RepositoryError::NoCommand.into(),
            ClapErrorKind::InvalidSubcommand => RepositoryError::UnknownCommand.into(),
            _ => {
                tracing::debug!(%error, "rejected command line");
                RepositoryError::IncorrectOperands.into()
            }
        }
    })
}

fn run() -> Result<()> {
    let cli = parse_cli()?;
    let command = cli.command.ok_or(RepositoryError::NoCommand)?;

    let config = Config::load_from_env()?;
    let pwd = std::env::current_dir()?;
    let mut repository =
        Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()), config)?;

    if !matches!(command, Commands::Init) {
        repository.ensure_initialized()?;
    }

    match command {
        Commands::Init => repository.init(),
        Commands::Add { file } => repository.add(&file),
        Commands::Commit { message } => repository.commit(message.as_deref().unwrap_or_default()),
        Commands::Rm { file } => repository.rm(&file),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(&message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => {
            repository.checkout(CheckoutTarget::from_operands(target, file)?)
        }
        Commands::Branch { name } => repository.branch(&name),
        Commands::RmBranch { name } => repository.rm_branch(&name),
        Commands::Reset { commit_id } => repository.reset(&commit_id),
    }
}

fn main() -> ExitCode {
    init_tracing();

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match repository_error(&error) {
            Some(reported) if reported.is_fatal() => {
                eprintln!("{reported}");
                ExitCode::FAILURE
            }
            Some(reported) => {
                tracing::debug!(kind = ?reported.kind(), "operation rejected");
                println!("{reported}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("{} {error:#}", "fatal:".red().bold());
                ExitCode::from(128)
            }
        },
    }
}
