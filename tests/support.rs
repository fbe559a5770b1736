//! Common test support utilities and fixtures
//!
//! Integration tests publish into a bare repository inside a temporary
//! directory, so nothing here touches the network.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run git in `dir`, returning the raw output
pub fn git_output(dir: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git")
}

/// Run git in `dir` and return stdout, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = git_output(dir, args);
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Configure identity so commits work on machines without a global git config
pub fn configure_identity(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// A bare "remote" plus a working copy that tracks it on `main`
pub struct Fixture {
    pub root: TempDir,
    pub remote: PathBuf,
    pub work: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create the remote and a working copy with one published commit
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let remote = root.path().join("remote.git");
        let work = root.path().join("work");
        fs::create_dir_all(&remote).unwrap();
        fs::create_dir_all(&work).unwrap();

        git(&remote, &["init", "--bare"]);
        git(&remote, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        git(&work, &["init"]);
        git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        configure_identity(&work);
        git(
            &work,
            &["remote", "add", "origin", remote.to_str().unwrap()],
        );

        fs::write(work.join("README.md"), "# Test Repository\n").unwrap();
        git(&work, &["add", "."]);
        git(&work, &["commit", "-m", "Initial commit"]);
        git(&work, &["push", "-u", "origin", "main"]);

        Self { root, remote, work }
    }

    /// Clone the remote into a second working copy, as another developer would
    pub fn clone_peer(&self, name: &str) -> PathBuf {
        let peer = self.root.path().join(name);
        git(
            self.root.path(),
            &[
                "clone",
                self.remote.to_str().unwrap(),
                peer.to_str().unwrap(),
            ],
        );
        configure_identity(&peer);
        peer
    }

    /// Commit a file in `dir` and push it to the remote's `main`
    pub fn push_from(&self, dir: &Path, file: &str, content: &str, message: &str) {
        fs::write(dir.join(file), content).unwrap();
        git(dir, &["add", "."]);
        git(dir, &["commit", "-m", message]);
        git(dir, &["push", "origin", "main"]);
    }

    /// Commit subjects on the remote branch, newest first
    pub fn remote_subjects(&self, branch: &str) -> Vec<String> {
        git(&self.remote, &["log", "--format=%s", branch])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Write a file in the working copy
    pub fn write(&self, file: &str, content: &str) {
        fs::write(self.work.join(file), content).unwrap();
    }

    /// `git status --porcelain` of the working copy
    pub fn porcelain(&self) -> String {
        git(&self.work, &["status", "--porcelain"])
    }
}

/// Run the reposync binary with given arguments
pub fn run_cli(args: &[&str], cwd: &Path) -> CliOutput {
    run_cli_with_env(args, cwd, &[])
}

/// Run the reposync binary with extra environment variables
pub fn run_cli_with_env(args: &[&str], cwd: &Path, envs: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_reposync"));
    cmd.args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("REPOSYNC_GIT");
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute reposync");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Create a script file with given content and make it executable
#[cfg(unix)]
pub fn create_executable_script(path: &Path, content: &str) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, content)?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}
