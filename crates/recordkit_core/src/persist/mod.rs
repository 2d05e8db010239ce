//! File-backed persistence for record sequences.
//!
//! # Responsibility
//! - Serialize a full record sequence to an indented JSON array.
//! - Reload a sequence wholesale, never partially.
//!
//! # Invariants
//! - A failed reload leaves in-memory state untouched.
//! - A reload accepts a file only when every entry passes `Entity::validate`.
//! - A failed flush leaves the previous file content untouched.
//! - File handles never outlive the call that opened them.

use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_log;

pub use json_log::{read_snapshot, PersistentLog};

pub type PersistResult<T> = Result<T, PersistError>;

/// Result of a wholesale reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The file existed and replaced the in-memory sequence.
    Loaded(usize),
    /// The file does not exist; in-memory state was kept.
    NoData,
}

#[derive(Debug)]
pub enum PersistError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file parsed but holds an entry that breaks a record invariant.
    Invalid {
        path: PathBuf,
        index: usize,
        source: ValidationError,
    },
    Encode(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o failure on `{}`: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "cannot parse `{}`: {source}", path.display())
            }
            Self::Invalid {
                path,
                index,
                source,
            } => write!(
                f,
                "entry {index} of `{}` is invalid: {source}",
                path.display()
            ),
            Self::Encode(err) => write!(f, "cannot encode records: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl PersistError {
    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "persist_io",
            Self::Parse { .. } => "persist_parse",
            Self::Invalid { .. } => "persist_invalid",
            Self::Encode(_) => "persist_encode",
        }
    }
}
