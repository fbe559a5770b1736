//! Configuration validation utilities
//!
//! All problems in a config are collected before reporting, so the operator
//! can fix the file in one pass.

use super::SyncConfig;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Remote name is empty or whitespace-only
    EmptyRemote,
    /// Remote name contains characters git does not accept
    InvalidRemote(String),
    /// Commit message prefix is empty or whitespace-only
    EmptyMessagePrefix,
    /// Git binary is empty or whitespace-only
    EmptyGitBinary,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRemote => write!(f, "Remote name cannot be empty"),
            ValidationError::InvalidRemote(name) => {
                write!(f, "Remote name '{}' is not a valid git remote name", name)
            }
            ValidationError::EmptyMessagePrefix => {
                write!(f, "Commit message prefix cannot be empty")
            }
            ValidationError::EmptyGitBinary => write!(f, "Git binary cannot be empty"),
        }
    }
}

/// Validate a remote name
pub fn validate_remote(remote: &str) -> Result<(), ValidationError> {
    if remote.trim().is_empty() {
        return Err(ValidationError::EmptyRemote);
    }

    if remote.chars().any(char::is_whitespace)
        || remote.starts_with('-')
        || remote.contains("..")
    {
        return Err(ValidationError::InvalidRemote(remote.to_string()));
    }

    Ok(())
}

/// Validates a complete configuration object
pub fn validate_config(config: &SyncConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_remote(&config.remote) {
        errors.push(error);
    }

    if config.message_prefix.trim().is_empty() {
        errors.push(ValidationError::EmptyMessagePrefix);
    }

    if config.git_binary.trim().is_empty() {
        errors.push(ValidationError::EmptyGitBinary);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convert validation errors to anyhow::Error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
