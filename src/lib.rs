//! Reposync - publish a working copy in one step: stage, commit, rebase, push

pub mod commands;
pub mod config;
pub mod constants;
pub mod git;
pub mod sync;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::SyncConfig;
pub use git::{CommitRef, GitPort, SystemGit};
pub use sync::{SyncContext, SyncError, SyncOutcome, sync};
