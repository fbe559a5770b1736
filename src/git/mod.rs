//! Git access for the sync pipeline
//!
//! ## Sub-modules
//!
//! - [`port`]: the [`GitPort`] trait every pipeline step goes through, plus [`GitError`]
//! - [`system`]: [`SystemGit`], the implementation that spawns the `git` executable
//! - [`types`]: value types read from a repository ([`CommitRef`], [`WorkingCopyStatus`])
//! - [`common`]: [`Logger`] for consistent console output

pub mod common;
pub mod port;
pub mod system;
pub mod types;

pub use common::Logger;
pub use port::{GitError, GitPort};
pub use system::SystemGit;
pub use types::{CommitRef, WorkingCopyStatus};
