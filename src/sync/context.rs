//! Everything a sync run reads, gathered up front

use crate::config::SyncConfig;
use crate::git::Logger;
use std::path::PathBuf;

/// Settings for one sync run
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Working copy being published
    pub work_dir: PathBuf,
    /// Remote to pull from and push to
    pub remote: String,
    /// Rebase onto the remote branch before pushing
    pub rebase: bool,
    /// Prefix of generated commit messages
    pub message_prefix: String,
    pub logger: Logger,
}

impl SyncContext {
    pub fn from_config(config: &SyncConfig, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            remote: config.remote.clone(),
            rebase: config.rebase,
            message_prefix: config.message_prefix.clone(),
            logger: Logger::default(),
        }
    }

    /// Override the configured remote
    pub fn with_remote(mut self, remote: Option<String>) -> Self {
        if let Some(remote) = remote {
            self.remote = remote;
        }
        self
    }

    /// Force the stage-commit-push variant without rebasing
    pub fn without_rebase(mut self, no_rebase: bool) -> Self {
        if no_rebase {
            self.rebase = false;
        }
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }
}
