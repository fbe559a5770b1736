use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use reposync::commands::validators;
use reposync::{commands::*, config::SyncConfig, constants, utils};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "reposync")]
#[command(about = "Stage, commit, rebase and push the current working copy")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Sync options used when no subcommand is given
    #[command(flatten)]
    sync: SyncArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage all changes, commit, rebase onto the remote branch and push (default)
    Sync(SyncArgs),

    /// Show what a sync would publish
    Status {
        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a default reposync.yaml
    Init {
        /// Output file name, relative to the working copy
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        output: String,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,

        /// Run as if started in this directory
        #[arg(short = 'C', long = "directory", value_name = "DIR")]
        directory: Option<PathBuf>,
    },
}

#[derive(Args, Clone)]
struct SyncArgs {
    /// Commit message (default: "auto update <timestamp>").
    /// Use `reposync -- <MESSAGE>` for a message that is also a subcommand name
    #[arg(value_name = "MESSAGE")]
    message: Option<String>,

    /// Push without rebasing onto the remote branch first
    #[arg(long)]
    no_rebase: bool,

    /// Remote to pull from and push to (overrides the config)
    #[arg(short, long)]
    remote: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Clone)]
struct CommonArgs {
    /// Run as if started in this directory
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Configuration file path (default: reposync.yaml in the working copy)
    #[arg(short, long)]
    config: Option<String>,

    /// Print every git command before running it
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(command) => execute_command(command).await,
        None => execute_sync(cli.sync).await,
    };

    if let Err(e) = &result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
    }

    ExitCode::from(utils::exit_code(&result))
}

async fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Sync(args) => execute_sync(args).await,
        Commands::Status { json, common } => {
            let context = build_context(&common)?;
            StatusCommand { json }.execute(&context).await
        }
        Commands::Init {
            output,
            overwrite,
            directory,
        } => {
            validators::validate_output_file(&output)?;
            let work_dir = resolve_work_dir(directory)?;

            // Init doesn't need config since it creates one
            let context = CommandContext {
                config: SyncConfig::default(),
                work_dir,
                verbose: false,
            };
            InitCommand { output, overwrite }.execute(&context).await
        }
    }
}

async fn execute_sync(args: SyncArgs) -> Result<()> {
    validators::validate_remote_arg(&args.remote)?;
    let context = build_context(&args.common)?;

    SyncCommand {
        message: args.message,
        remote: args.remote,
        no_rebase: args.no_rebase,
    }
    .execute(&context)
    .await
}

fn resolve_work_dir(directory: Option<PathBuf>) -> Result<PathBuf> {
    let work_dir = match directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    validators::validate_work_dir(&work_dir)?;
    Ok(work_dir)
}

fn build_context(common: &CommonArgs) -> Result<CommandContext> {
    let work_dir = resolve_work_dir(common.directory.clone())?;
    let config = SyncConfig::discover(common.config.as_deref(), &work_dir)?;

    Ok(CommandContext {
        config,
        work_dir,
        verbose: common.verbose,
    })
}
