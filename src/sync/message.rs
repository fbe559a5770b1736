//! Commit message selection

use crate::constants::commit::TIMESTAMP_FORMAT;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `"<prefix> <YYYY-MM-DD HH:MM:SS>"`
pub fn default_commit_message<Tz>(prefix: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} {}", prefix.trim(), now.format(TIMESTAMP_FORMAT))
}

/// Use `supplied` verbatim unless it is absent or blank
pub fn resolve_commit_message<Tz>(supplied: Option<&str>, prefix: &str, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match supplied {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => default_commit_message(prefix, now),
    }
}
