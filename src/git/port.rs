//! The seam between the sync pipeline and git

use super::types::{CommitRef, WorkingCopyStatus};
use thiserror::Error;

/// Errors from running git
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be located.
    #[error("git executable '{binary}' not found")]
    NotFound { binary: String },

    /// The git executable was found but could not be spawned.
    #[error("failed to run git {args}: {source}")]
    Io {
        args: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran and exited with a failure status.
    #[error("git {args} failed{}: {stderr}", exit_suffix(.code))]
    CommandFailed {
        args: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" (exit {c})")).unwrap_or_default()
}

impl GitError {
    /// Output git printed on failure, or the error message for spawn failures
    pub fn detail(&self) -> String {
        match self {
            GitError::CommandFailed { stderr, .. } => stderr.trim().to_string(),
            other => other.to_string(),
        }
    }
}

/// Operations the sync pipeline needs from a repository.
///
/// Every call is scoped to one working copy chosen when the implementation
/// is built. Keeping git behind this trait lets the pipeline run against a
/// recording fake in tests.
pub trait GitPort {
    /// Version string of the git client; fails when git cannot be run.
    fn version(&self) -> Result<String, GitError>;

    /// Whether the working directory is inside a work tree.
    fn is_inside_work_tree(&self) -> Result<bool, GitError>;

    /// Name of the checked-out branch, `None` on a detached HEAD.
    fn current_branch(&self) -> Result<Option<String>, GitError>;

    /// URL of `remote`, `None` when no such remote is configured.
    fn remote_url(&self, remote: &str) -> Result<Option<String>, GitError>;

    /// Stage additions, modifications and deletions.
    fn stage_all(&self) -> Result<(), GitError>;

    /// Whether the index differs from HEAD.
    fn has_staged_changes(&self) -> Result<bool, GitError>;

    /// Commit the index with `message`.
    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Latest commit on HEAD, `None` before the first commit.
    fn head_commit(&self) -> Result<Option<CommitRef>, GitError>;

    /// Whether `branch` exists on `remote` (asks the remote).
    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError>;

    /// Number of commits on HEAD not reachable from `remote/branch`.
    fn unpublished_commits(&self, remote: &str, branch: &str) -> Result<usize, GitError>;

    /// `git pull --rebase remote branch`.
    fn pull_rebase(&self, remote: &str, branch: &str) -> Result<(), GitError>;

    /// Whether a rebase was left stopped in the working copy.
    fn rebase_in_progress(&self) -> Result<bool, GitError>;

    /// Push `branch` to `remote` and set it as upstream.
    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError>;

    /// Counts of pending modifications.
    fn status(&self) -> Result<WorkingCopyStatus, GitError>;
}
