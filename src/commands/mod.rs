//! Command implementations behind the CLI

pub mod base;
pub mod init;
pub mod status;
pub mod sync;
pub mod validators;

pub use base::{Command, CommandContext};
pub use init::InitCommand;
pub use status::StatusCommand;
pub use sync::SyncCommand;
