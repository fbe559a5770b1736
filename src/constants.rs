//! Central constants for the reposync application

/// Default values for Git operations
pub mod git {
    /// Remote used when neither the config nor the command line names one
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Git executable looked up on PATH by default
    pub const DEFAULT_BINARY: &str = "git";

    /// Environment variable overriding the git executable
    pub const BINARY_ENV_VAR: &str = "REPOSYNC_GIT";
}

/// Default values for generated commit messages
pub mod commit {
    /// Prefix of the generated message when none is supplied
    pub const DEFAULT_MESSAGE_PREFIX: &str = "auto update";

    /// chrono format of the timestamp appended to the prefix
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "reposync.yaml";

    /// Printed after a successful publish when no hint is configured
    pub const DEFAULT_REDEPLOY_HINT: &str =
        "If this repository backs a hosted app, trigger a redeploy/reboot on the hosting platform.";
}
