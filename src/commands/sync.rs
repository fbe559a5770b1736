//! Sync command implementation

use super::{Command, CommandContext};
use crate::sync::{SyncContext, SyncOutcome, sync};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Sync command: stage, commit, rebase and push the working copy
pub struct SyncCommand {
    /// Commit message; blank or missing means a generated one
    pub message: Option<String>,
    /// Remote overriding the configured one
    pub remote: Option<String>,
    /// Skip the rebase-pull before pushing
    pub no_rebase: bool,
}

#[async_trait]
impl Command for SyncCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let git = context.git();
        let sync_context = SyncContext::from_config(&context.config, context.work_dir.clone())
            .with_remote(self.remote.clone())
            .without_rebase(self.no_rebase)
            .with_logger(logger);

        match sync(&git, &sync_context, self.message.as_deref()) {
            Ok(SyncOutcome::Published { commit, committed }) => {
                let verb = if committed {
                    "Committed and published"
                } else {
                    "Published"
                };
                println!("{}", format!("{verb}: {commit}").green().bold());
                println!("{}", context.config.redeploy_hint().yellow());
                Ok(())
            }
            Ok(SyncOutcome::NothingToPublish { head }) => {
                println!("{}", "Nothing to publish, working copy is up to date".yellow());
                if let Some(commit) = head {
                    println!("Latest commit: {}", commit);
                }
                Ok(())
            }
            Err(e) => {
                if let Some(hint) = e.remediation() {
                    logger.error("reposync", &hint);
                }
                Err(e.into())
            }
        }
    }
}
