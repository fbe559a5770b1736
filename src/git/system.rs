//! [`GitPort`] backed by the system `git` executable
//!
//! Every operation spawns one `git` process in the working copy and waits for
//! it. Nothing is retried and no timeout is applied, so a stalled network
//! pull or push blocks until git gives up or the operator interrupts.

use super::common::Logger;
use super::port::{GitError, GitPort};
use super::types::{CommitRef, WorkingCopyStatus};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Runs git commands inside one working copy
#[derive(Debug, Clone)]
pub struct SystemGit {
    binary: String,
    work_dir: PathBuf,
    logger: Logger,
}

impl SystemGit {
    pub fn new(binary: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: work_dir.into(),
            logger: Logger::default(),
        }
    }

    /// Echo each git invocation through `logger`
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Spawn git and return its raw output whatever the exit status
    fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        let joined = args.join(" ");
        self.logger.debug("git", &format!("{} {}", self.binary, joined));

        Command::new(&self.binary)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| {
                if source.kind() == ErrorKind::NotFound {
                    GitError::NotFound {
                        binary: self.binary.clone(),
                    }
                } else {
                    GitError::Io {
                        args: joined,
                        source,
                    }
                }
            })
    }

    /// Spawn git and return stdout, failing on a non-zero exit status
    fn run_checked(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(failure(args, &output));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Whether `git rev-parse --git-path <name>` points at an existing path
    fn git_path_exists(&self, name: &str) -> Result<bool, GitError> {
        let path = self.run_checked(&["rev-parse", "--git-path", name])?;
        Ok(self.work_dir.join(path.trim()).exists())
    }

    /// Names of all configured remotes
    pub fn remotes(&self) -> Result<Vec<String>, GitError> {
        let output = self.run_checked(&["remote"])?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn ref_exists(&self, reference: &str) -> Result<bool, GitError> {
        let output = self.run(&["rev-parse", "--verify", "--quiet", reference])?;
        Ok(output.status.success())
    }
}

fn failure(args: &[&str], output: &Output) -> GitError {
    let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    // push and pull report some rejections on stdout
    if stderr.trim().is_empty() {
        stderr = String::from_utf8_lossy(&output.stdout).into_owned();
    }

    GitError::CommandFailed {
        args: args.join(" "),
        code: output.status.code(),
        stderr,
    }
}

impl GitPort for SystemGit {
    fn version(&self) -> Result<String, GitError> {
        Ok(self.run_checked(&["--version"])?.trim().to_string())
    }

    fn is_inside_work_tree(&self) -> Result<bool, GitError> {
        let output = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    fn current_branch(&self) -> Result<Option<String>, GitError> {
        // Also resolves an unborn branch, which `branch --show-current` hides behind HEAD
        let output = self.run(&["symbolic-ref", "--quiet", "--short", "HEAD"])?;
        if !output.status.success() {
            return Ok(None);
        }

        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(if branch.is_empty() { None } else { Some(branch) })
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>, GitError> {
        let output = self.run(&["remote", "get-url", remote])?;
        if !output.status.success() {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.run_checked(&["add", "--all"]).map(|_| ())
    }

    fn has_staged_changes(&self) -> Result<bool, GitError> {
        let args = ["diff", "--cached", "--quiet"];
        let output = self.run(&args)?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(failure(&args, &output)),
        }
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        // Store the message byte-for-byte, without git's whitespace cleanup
        self.run_checked(&["commit", "--cleanup=verbatim", "-m", message])
            .map(|_| ())
    }

    fn head_commit(&self) -> Result<Option<CommitRef>, GitError> {
        if !self.ref_exists("HEAD")? {
            return Ok(None);
        }

        let line = self.run_checked(&["log", "-1", "--format=%h%x00%s"])?;
        Ok(CommitRef::parse(&line))
    }

    fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError> {
        let args = ["ls-remote", "--exit-code", "--heads", remote, branch];
        let output = self.run(&args)?;
        match output.status.code() {
            Some(0) => Ok(true),
            // --exit-code reports "no matching refs" as 2
            Some(2) => Ok(false),
            _ => Err(failure(&args, &output)),
        }
    }

    fn unpublished_commits(&self, remote: &str, branch: &str) -> Result<usize, GitError> {
        if !self.ref_exists("HEAD")? {
            return Ok(0);
        }

        let tracking = format!("refs/remotes/{}/{}", remote, branch);
        let range = if self.ref_exists(&tracking)? {
            format!("{}..HEAD", tracking)
        } else {
            "HEAD".to_string()
        };

        let count = self.run_checked(&["rev-list", "--count", &range])?;
        count
            .trim()
            .parse()
            .map_err(|_| GitError::CommandFailed {
                args: format!("rev-list --count {}", range),
                code: None,
                stderr: format!("unexpected output '{}'", count.trim()),
            })
    }

    fn pull_rebase(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.run_checked(&["pull", "--rebase", remote, branch])
            .map(|_| ())
    }

    fn rebase_in_progress(&self) -> Result<bool, GitError> {
        Ok(self.git_path_exists("rebase-merge")? || self.git_path_exists("rebase-apply")?)
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.run_checked(&["push", "--set-upstream", remote, branch])
            .map(|_| ())
    }

    fn status(&self) -> Result<WorkingCopyStatus, GitError> {
        let output = self.run_checked(&["status", "--porcelain"])?;
        Ok(WorkingCopyStatus::parse_porcelain(&output))
    }
}
