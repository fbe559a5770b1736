//! Utility modules for common functionality

pub mod exit_codes;

pub use exit_codes::exit_code;
