//! Init command implementation

use super::{Command, CommandContext};
use crate::config::SyncConfig;
use crate::git::GitPort;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Init command for writing a default config file
pub struct InitCommand {
    pub output: String,
    pub overwrite: bool,
}

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let path = context.work_dir.join(&self.output);

        if path.exists() && !self.overwrite {
            return Err(anyhow::anyhow!(
                "Output file '{}' already exists. Use --overwrite to replace it.",
                path.display()
            ));
        }

        let mut config = SyncConfig::default();

        // Pick up the only remote when the repository has one that isn't "origin"
        let git = context.git();
        if git.remote_url(&config.remote).ok().flatten().is_none()
            && let Ok(remotes) = git.remotes()
            && let [remote] = remotes.as_slice()
        {
            println!(
                "{}",
                format!("Using remote '{}' (no '{}' remote found)", remote, config.remote).yellow()
            );
            config.remote = remote.clone();
        }

        config.save(&path.to_string_lossy())?;

        println!(
            "{}",
            format!("Configuration saved to '{}'", path.display()).green()
        );

        Ok(())
    }
}
