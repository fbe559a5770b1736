//! Status command implementation

use super::{Command, CommandContext};
use crate::git::{CommitRef, GitPort, WorkingCopyStatus};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use serde::Serialize;

/// Output format for JSON mode
#[derive(Debug, Serialize)]
struct StatusOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    remote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_url: Option<String>,
    #[serde(flatten)]
    changes: WorkingCopyStatus,
    unpublished: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    head: Option<CommitRef>,
    rebase: bool,
}

/// Status command: show what a sync would publish
pub struct StatusCommand {
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let git = context.git();
        let remote = context.config.remote.clone();

        git.version().context("git is not available")?;
        if !git.is_inside_work_tree()? {
            anyhow::bail!(
                "'{}' is not inside a git repository",
                context.work_dir.display()
            );
        }

        let branch = git.current_branch()?;
        let remote_url = git.remote_url(&remote)?;
        let unpublished = match &branch {
            Some(branch) => git.unpublished_commits(&remote, branch)?,
            None => 0,
        };

        let output = StatusOutput {
            branch,
            remote,
            remote_url,
            changes: git.status()?,
            unpublished,
            head: git.head_commit()?,
            rebase: context.config.rebase,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        print_human(&output);
        Ok(())
    }
}

fn print_human(output: &StatusOutput) {
    let branch = output.branch.as_deref().unwrap_or("(detached HEAD)");
    println!("{} {}", "Branch:".bold(), branch.cyan().bold());

    match &output.remote_url {
        Some(url) => println!("{} {} ({})", "Remote:".bold(), output.remote, url),
        None => println!(
            "{} {}",
            "Remote:".bold(),
            format!("{} (not configured)", output.remote).red()
        ),
    }

    println!(
        "{} {} staged, {} unstaged, {} untracked",
        "Changes:".bold(),
        output.changes.staged,
        output.changes.unstaged,
        output.changes.untracked
    );
    println!("{} {}", "Unpublished commits:".bold(), output.unpublished);
    println!(
        "{} {}",
        "Rebase before push:".bold(),
        if output.rebase { "yes" } else { "no" }
    );

    if let Some(head) = &output.head {
        println!("{} {}", "Latest commit:".bold(), head);
    }

    if output.changes.is_clean() && output.unpublished == 0 {
        println!("{}", "Nothing to publish".green());
    }
}
