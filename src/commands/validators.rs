//! Command argument validation utilities
//!
//! Checks that go beyond what clap parses: values that must name a usable
//! remote or an existing directory.

use crate::config::validation::validate_remote;
use anyhow::{Result, anyhow};
use std::path::Path;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate the `--remote` override
pub fn validate_remote_arg(remote: &Option<String>) -> Result<()> {
    if let Some(name) = remote
        && let Err(error) = validate_remote(name)
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "remote".to_string(),
                value: name.clone(),
                reason: error.to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the `-C` working directory
///
/// Ensures the directory exists before any git command runs in it
pub fn validate_work_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "directory".to_string(),
                value: dir.display().to_string(),
                reason: "not an existing directory".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the init output file name
pub fn validate_output_file(output: &str) -> Result<()> {
    if output.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "output".to_string(),
                value: output.to_string(),
                reason: "output file cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}
