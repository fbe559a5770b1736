//! Common git utilities and shared helpers

use colored::*;

/// Logger for sync operations with consistent formatting
///
/// Every line is prefixed with a label (usually the branch being synced) in
/// cyan/bold. Errors go to stderr. Debug lines are only printed in verbose
/// mode and are used to echo each git invocation.
///
/// ## Example
///
/// ```rust,no_run
/// use reposync::git::Logger;
///
/// let logger = Logger::default();
/// logger.info("main", "Staging changes");
/// logger.success("main", "Pushed to origin/main");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg);
    }

    pub fn success(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, label: &str, msg: &str) {
        eprintln!("{} | {}", label.cyan().bold(), msg.red());
    }

    pub fn debug(&self, label: &str, msg: &str) {
        if self.verbose {
            println!("{} | {}", label.cyan().bold(), msg.dimmed());
        }
    }
}
