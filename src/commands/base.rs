//! Base types and traits for the command pattern

use crate::config::SyncConfig;
use crate::git::{Logger, SystemGit};
use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing shared configuration and options
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: SyncConfig,
    /// Working copy the command operates on
    pub work_dir: PathBuf,
    /// Echo every git invocation
    pub verbose: bool,
}

impl CommandContext {
    pub fn logger(&self) -> Logger {
        Logger::new(self.verbose)
    }

    /// Git client for the working copy, using the configured executable
    pub fn git(&self) -> SystemGit {
        SystemGit::new(self.config.resolved_git_binary(), self.work_dir.clone())
            .with_logger(self.logger())
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
