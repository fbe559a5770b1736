//! The sync sequence
//!
//! Each step returns a `Result`; the first failure ends the run with the
//! [`SyncError`] variant naming that step. Nothing is retried or rolled back.

use super::context::SyncContext;
use super::error::SyncError;
use super::message::resolve_commit_message;
use crate::git::{CommitRef, GitError, GitPort};
use chrono::Local;

/// How a sync run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The branch was pushed; `committed` tells whether this run made a commit
    Published { commit: CommitRef, committed: bool },
    /// No pending changes and no unpublished commits; nothing was pulled or pushed
    NothingToPublish { head: Option<CommitRef> },
}

impl SyncOutcome {
    /// Latest commit on the branch, if it has any
    pub fn head(&self) -> Option<&CommitRef> {
        match self {
            SyncOutcome::Published { commit, .. } => Some(commit),
            SyncOutcome::NothingToPublish { head } => head.as_ref(),
        }
    }
}

/// Stage everything, commit it, rebase onto the remote branch and push.
///
/// `message` is used verbatim when it is non-blank; otherwise the commit gets
/// `"<prefix> <timestamp>"`. With nothing staged no commit is made, and the
/// run stops at [`SyncOutcome::NothingToPublish`] unless earlier local
/// commits are still waiting to be pushed.
pub fn sync(
    git: &dyn GitPort,
    ctx: &SyncContext,
    message: Option<&str>,
) -> Result<SyncOutcome, SyncError> {
    let branch = check_preconditions(git, ctx)?;
    let logger = ctx.logger;
    let label = branch.as_str();

    logger.info(label, "Staging all changes");
    git.stage_all()
        .map_err(|e| SyncError::StageFailed(e.detail()))?;

    let committed = if git.has_staged_changes()? {
        let message = resolve_commit_message(message, &ctx.message_prefix, Local::now());
        logger.info(label, &format!("Committing: {}", message));
        git.commit(&message)
            .map_err(|e| SyncError::CommitFailed(e.detail()))?;
        true
    } else {
        let unpublished = git.unpublished_commits(&ctx.remote, &branch)?;
        if unpublished == 0 {
            logger.warn(label, "Nothing to publish");
            return Ok(SyncOutcome::NothingToPublish {
                head: git.head_commit()?,
            });
        }

        logger.info(
            label,
            &format!(
                "No changes to commit, {} unpublished commit(s) to push",
                unpublished
            ),
        );
        false
    };

    integrate(git, ctx, &branch)?;

    logger.info(label, &format!("Pushing to {}/{}", ctx.remote, branch));
    git.push(&ctx.remote, &branch)
        .map_err(|e| SyncError::PushRejected {
            remote: ctx.remote.clone(),
            branch: branch.clone(),
            detail: e.detail(),
        })?;

    let commit = git.head_commit()?.ok_or_else(|| GitError::CommandFailed {
        args: "log -1".to_string(),
        code: None,
        stderr: "HEAD has no commits after push".to_string(),
    })?;

    logger.success(label, &format!("Published {}", commit));
    Ok(SyncOutcome::Published { commit, committed })
}

/// Fail fast, before anything is staged, and resolve the branch once
fn check_preconditions(git: &dyn GitPort, ctx: &SyncContext) -> Result<String, SyncError> {
    let version = git
        .version()
        .map_err(|e| SyncError::ToolingUnavailable(e.to_string()))?;
    ctx.logger.debug("reposync", &version);

    if !git.is_inside_work_tree()? {
        return Err(SyncError::NotARepository(ctx.work_dir.clone()));
    }

    let branch = git.current_branch()?.ok_or(SyncError::NoBranchResolved)?;

    if git.remote_url(&ctx.remote)?.is_none() {
        return Err(SyncError::NoRemoteConfigured(ctx.remote.clone()));
    }

    Ok(branch)
}

/// Replay local commits on top of the remote branch
fn integrate(git: &dyn GitPort, ctx: &SyncContext, branch: &str) -> Result<(), SyncError> {
    let logger = ctx.logger;
    let failed = |detail: String| SyncError::IntegrationFailed {
        remote: ctx.remote.clone(),
        branch: branch.to_string(),
        detail,
    };

    if !ctx.rebase {
        logger.debug(branch, "Rebase disabled, pushing directly");
        return Ok(());
    }

    let exists = git
        .remote_branch_exists(&ctx.remote, branch)
        .map_err(|e| failed(e.detail()))?;
    if !exists {
        logger.info(
            branch,
            &format!("{}/{} does not exist yet, skipping rebase", ctx.remote, branch),
        );
        return Ok(());
    }

    logger.info(branch, &format!("Rebasing onto {}/{}", ctx.remote, branch));
    if let Err(e) = git.pull_rebase(&ctx.remote, branch) {
        if git.rebase_in_progress()? {
            return Err(SyncError::IntegrationConflict {
                remote: ctx.remote.clone(),
                branch: branch.to_string(),
                detail: e.detail(),
            });
        }
        return Err(failed(e.detail()));
    }

    Ok(())
}
