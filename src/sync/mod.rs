//! Publish local work: stage, commit, rebase onto upstream, push
//!
//! [`sync`] is the whole sequence. It talks to git only through
//! [`GitPort`](crate::git::GitPort) and reads every setting from a
//! [`SyncContext`], so it can run against a fake repository in tests.

pub mod context;
pub mod error;
pub mod message;
pub mod pipeline;

pub use context::SyncContext;
pub use error::SyncError;
pub use message::{default_commit_message, resolve_commit_message};
pub use pipeline::{SyncOutcome, sync};
