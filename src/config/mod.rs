//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::SyncConfig;
pub use validation::ValidationError;
