//! Values read back from a repository

use serde::Serialize;
use std::fmt;

/// Reference to a commit as reported to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRef {
    /// Abbreviated object id
    pub short_id: String,
    /// First line of the commit message
    pub subject: String,
}

impl CommitRef {
    /// Parse `git log --format=%h%x00%s` output
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (short_id, subject) = line.split_once('\0')?;
        if short_id.is_empty() {
            return None;
        }

        Some(Self {
            short_id: short_id.to_string(),
            subject: subject.to_string(),
        })
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_id, self.subject)
    }
}

/// Pending modifications in a working copy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkingCopyStatus {
    /// Paths with changes in the index
    pub staged: usize,
    /// Tracked paths with changes not yet staged
    pub unstaged: usize,
    /// Paths git does not track yet
    pub untracked: usize,
}

impl WorkingCopyStatus {
    /// Parse `git status --porcelain` (v1) output
    ///
    /// A path modified both in the index and in the work tree counts once as
    /// staged and once as unstaged.
    pub fn parse_porcelain(output: &str) -> Self {
        let mut status = Self::default();

        for line in output.lines() {
            let mut codes = line.chars();
            let (Some(index), Some(worktree)) = (codes.next(), codes.next()) else {
                continue;
            };

            match (index, worktree) {
                ('?', '?') => status.untracked += 1,
                ('!', '!') => {}
                _ => {
                    if index != ' ' {
                        status.staged += 1;
                    }
                    if worktree != ' ' {
                        status.unstaged += 1;
                    }
                }
            }
        }

        status
    }

    /// True when nothing at all is pending
    pub fn is_clean(&self) -> bool {
        self.staged == 0 && self.unstaged == 0 && self.untracked == 0
    }
}
