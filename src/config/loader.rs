//! Configuration file loading and saving

use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_remote() -> String {
    constants::git::DEFAULT_REMOTE.to_string()
}

fn default_rebase() -> bool {
    true
}

fn default_message_prefix() -> String {
    constants::commit::DEFAULT_MESSAGE_PREFIX.to_string()
}

fn default_git_binary() -> String {
    constants::git::DEFAULT_BINARY.to_string()
}

/// Settings read from `reposync.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Remote to pull from and push to
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Replay local commits on top of upstream before pushing
    #[serde(default = "default_rebase")]
    pub rebase: bool,
    /// Prefix of generated commit messages
    #[serde(default = "default_message_prefix")]
    pub message_prefix: String,
    /// Git executable to spawn
    #[serde(default = "default_git_binary")]
    pub git_binary: String,
    /// Advisory printed after a successful publish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redeploy_hint: Option<String>,
}

impl SyncConfig {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        // An empty file means "all defaults"
        let config: SyncConfig = if content.trim().is_empty() {
            SyncConfig::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file '{}'", path))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `reposync.yaml` in the
    /// working directory is used when present and defaults apply otherwise.
    pub fn discover(explicit: Option<&str>, work_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = Self::default_path(work_dir);
        if candidate.exists() {
            Self::load(&candidate.to_string_lossy())
        } else {
            Ok(Self::default())
        }
    }

    /// Location of the config file inside a working copy
    pub fn default_path(work_dir: &Path) -> PathBuf {
        work_dir.join(constants::config::DEFAULT_CONFIG_FILE)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;

        // Add document marker for yamllint compliance
        let yaml_content = format!("---\n{}", yaml);

        std::fs::write(path, yaml_content)
            .with_context(|| format!("Failed to write config file '{}'", path))?;

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Git executable to spawn, honoring the `REPOSYNC_GIT` override
    pub fn resolved_git_binary(&self) -> String {
        std::env::var(constants::git::BINARY_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.git_binary.clone())
    }

    /// Advisory printed after a successful publish
    pub fn redeploy_hint(&self) -> &str {
        self.redeploy_hint
            .as_deref()
            .unwrap_or(constants::config::DEFAULT_REDEPLOY_HINT)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            rebase: default_rebase(),
            message_prefix: default_message_prefix(),
            git_binary: default_git_binary(),
            redeploy_hint: None,
        }
    }
}
