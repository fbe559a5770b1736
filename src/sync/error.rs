//! Failures of the sync sequence

use crate::git::GitError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a sync stopped. Every variant is terminal for the invocation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The git client cannot be located or run.
    #[error("git is not available: {0}")]
    ToolingUnavailable(String),

    /// The working directory is not inside a git work tree.
    #[error("'{}' is not inside a git repository", .0.display())]
    NotARepository(PathBuf),

    /// HEAD is detached or otherwise not on a branch.
    #[error("could not determine the current branch (detached HEAD?)")]
    NoBranchResolved,

    /// The configured remote does not exist.
    #[error("remote '{0}' is not configured")]
    NoRemoteConfigured(String),

    /// `git add --all` failed.
    #[error("failed to stage changes: {0}")]
    StageFailed(String),

    /// Staged changes exist but the commit was not created.
    #[error("failed to commit changes: {0}")]
    CommitFailed(String),

    /// The rebase-pull stopped on conflicting changes.
    #[error("rebase onto {remote}/{branch} stopped on conflicts: {detail}")]
    IntegrationConflict {
        remote: String,
        branch: String,
        detail: String,
    },

    /// The pull failed without leaving a rebase behind (network, auth, ...).
    #[error("failed to pull {remote}/{branch}: {detail}")]
    IntegrationFailed {
        remote: String,
        branch: String,
        detail: String,
    },

    /// The remote refused the push.
    #[error("push to {remote}/{branch} was rejected: {detail}")]
    PushRejected {
        remote: String,
        branch: String,
        detail: String,
    },

    /// Any other git failure while inspecting the repository.
    #[error(transparent)]
    Git(#[from] GitError),
}

impl SyncError {
    /// True for errors raised before the working copy is touched
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SyncError::ToolingUnavailable(_)
                | SyncError::NotARepository(_)
                | SyncError::NoBranchResolved
                | SyncError::NoRemoteConfigured(_)
        )
    }

    /// What the operator should do before running again
    pub fn remediation(&self) -> Option<String> {
        match self {
            SyncError::ToolingUnavailable(_) => Some(
                "Install git or point REPOSYNC_GIT / git_binary at the executable.".to_string(),
            ),
            SyncError::NotARepository(_) => {
                Some("Run inside a git working copy or pass -C <dir>.".to_string())
            }
            SyncError::NoBranchResolved => {
                Some("Check out a branch (git switch <branch>) and run again.".to_string())
            }
            SyncError::NoRemoteConfigured(remote) => Some(format!(
                "Add the remote first: git remote add {} <url>",
                remote
            )),
            SyncError::CommitFailed(_) => Some(
                "Fix whatever rejected the commit (hooks, identity) and run again; changes stay staged."
                    .to_string(),
            ),
            SyncError::IntegrationConflict { .. } => Some(
                "Resolve the conflicts, `git add` the fixed files, then run `git rebase --continue`. \
                 To give up instead, run `git rebase --abort`. Run reposync again once the rebase is finished."
                    .to_string(),
            ),
            SyncError::PushRejected { remote, branch, .. } => Some(format!(
                "The remote has changes this push did not include or refused access. \
                 Integrate {}/{} (run again with rebase enabled) or check permissions, then retry.",
                remote, branch
            )),
            SyncError::StageFailed(_)
            | SyncError::IntegrationFailed { .. }
            | SyncError::Git(_) => None,
        }
    }
}
