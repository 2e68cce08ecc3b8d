use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use pit::artifacts::core::PagerWriter;
use pit::{ErrorKind, PitError, Repository};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control system",
    long_about = "pit tracks a set of files in the current directory, snapshots them into \
    commits and switches between named branches, restoring the working directory to match.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Print debug logs to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Start tracking a file",
        long_about = "This command appends a file from the working directory to the index."
    )]
    Add {
        #[arg(index = 1, help = "The file to track")]
        file: String,
    },
    #[command(
        name = "rm",
        about = "Stop tracking a file",
        long_about = "This command removes a file from the index. The working copy is kept."
    )]
    Rm {
        #[arg(index = 1, help = "The file to stop tracking")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots every tracked file into a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "checkout",
        about = "Switch to a commit or a branch",
        long_about = "This command restores the working directory to a commit id (detaching HEAD) \
        or to the head of a branch. With -b it creates a new branch at the current commit."
    )]
    Checkout {
        #[arg(
            short = 'b',
            value_name = "NEW_BRANCH",
            conflicts_with = "target",
            help = "Create a new branch and switch to it"
        )]
        new_branch: Option<String>,
        #[arg(
            index = 1,
            required_unless_present = "new_branch",
            help = "A commit id or a branch name"
        )]
        target: Option<String>,
    },
    #[command(name = "branch", about = "List branches in creation order")]
    Branch,
    #[command(name = "status", about = "Show the tracked files")]
    Status,
    #[command(name = "log", about = "Show the commit history of the current head")]
    Log,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pit=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(command: &Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match command {
        Commands::Init { path } => {
            let path = path.as_deref().map(Into::into).unwrap_or(pwd);
            Repository::new(path, Box::new(std::io::stdout()))?.init()?
        }
        Commands::Add { file } => open(&pwd)?.add(file)?,
        Commands::Rm { file } => open(&pwd)?.rm(file)?,
        Commands::Commit { message } => {
            open(&pwd)?.commit(message)?;
        }
        Commands::Checkout {
            new_branch: Some(new_branch),
            ..
        } => open(&pwd)?.create_branch(new_branch)?,
        Commands::Checkout {
            target: Some(target),
            ..
        } => open(&pwd)?.checkout(target)?,
        Commands::Checkout { .. } => unreachable!("clap requires a target or -b"),
        Commands::Branch => open(&pwd)?.branch()?,
        Commands::Status => open(&pwd)?.status()?,
        Commands::Log => log(&pwd)?,
    }

    std::io::stdout().flush()?;
    Ok(())
}

fn open(path: &std::path::Path) -> Result<Repository> {
    Ok(Repository::open(path, Box::new(std::io::stdout()))?)
}

fn log(path: &std::path::Path) -> Result<()> {
    let use_pager = std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none();

    if use_pager {
        let pager = Pager::new();
        let repository = Repository::open(path, Box::new(PagerWriter::new(pager.clone())))?;
        repository.log()?;
        minus::page_all(pager)?;
    } else {
        open(path)?.log()?;
    }

    Ok(())
}

fn report(err: anyhow::Error) -> ExitCode {
    eprintln!("ERROR: {}", err);

    match err.downcast_ref::<PitError>() {
        Some(pit_error) => {
            if pit_error.kind() == ErrorKind::Io {
                eprintln!("warning: the operation may have stopped halfway, inspect .pit before continuing");
            }
            ExitCode::from(pit_error.exit_code())
        }
        None => ExitCode::from(3),
    }
}
