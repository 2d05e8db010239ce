//! JSON-array persistent log.

use super::{PersistError, PersistResult, ReloadOutcome};
use crate::model::Entity;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// In-memory record buffer that can be flushed to and reloaded from a file.
///
/// `append` never touches disk. `flush` writes the whole buffer; there are no
/// partial updates.
#[derive(Debug, Clone)]
pub struct PersistentLog<T> {
    entries: Vec<T>,
}

impl<T> Default for PersistentLog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> PersistentLog<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers one entry in memory.
    pub fn append(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes every buffered entry to `path`, replacing its content.
    ///
    /// Returns the number of entries written.
    ///
    /// # Errors
    /// - `Encode` when an entry cannot be serialized.
    /// - `Io` when the file cannot be written; the old content survives.
    pub fn flush(&self, path: impl AsRef<Path>) -> PersistResult<usize> {
        let path = path.as_ref();
        let started_at = Instant::now();

        let result = write_atomically(path, &self.entries);
        match &result {
            Ok(()) => info!(
                "event=log_flush module=persist status=ok entries={} duration_ms={} path={}",
                self.entries.len(),
                started_at.elapsed().as_millis(),
                path.display()
            ),
            Err(err) => error!(
                "event=log_flush module=persist status=error error_code={} error={}",
                err.code(),
                err
            ),
        }
        result.map(|()| self.entries.len())
    }

    /// Replaces the in-memory sequence with the content of `path`.
    ///
    /// # Contract
    /// - Missing file: `Ok(ReloadOutcome::NoData)`, state untouched.
    /// - Unreadable or malformed file: error, state untouched.
    /// - Any entry failing `Entity::validate`: `Invalid`, state untouched.
    /// - Otherwise the buffer is replaced wholesale.
    pub fn replace_all_from(&mut self, path: impl AsRef<Path>) -> PersistResult<ReloadOutcome>
    where
        T: Entity,
    {
        let path = path.as_ref();
        match read_snapshot(path).and_then(|snapshot| check_entries(path, snapshot)) {
            Ok(Some(entries)) => {
                let count = entries.len();
                self.entries = entries;
                info!(
                    "event=log_reload module=persist status=ok entries={count} path={}",
                    path.display()
                );
                Ok(ReloadOutcome::Loaded(count))
            }
            Ok(None) => {
                info!(
                    "event=log_reload module=persist status=no_data path={}",
                    path.display()
                );
                Ok(ReloadOutcome::NoData)
            }
            Err(err) => {
                warn!(
                    "event=log_reload module=persist status=error error_code={} error={}",
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl<T> From<Vec<T>> for PersistentLog<T> {
    fn from(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

fn check_entries<T: Entity>(
    path: &Path,
    snapshot: Option<Vec<T>>,
) -> PersistResult<Option<Vec<T>>> {
    if let Some(entries) = &snapshot {
        for (index, entry) in entries.iter().enumerate() {
            entry.validate().map_err(|source| PersistError::Invalid {
                path: path.to_path_buf(),
                index,
                source,
            })?;
        }
    }
    Ok(snapshot)
}

/// Reads a persisted sequence without touching any log.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_snapshot<T>(path: impl AsRef<Path>) -> PersistResult<Option<Vec<T>>>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| PersistError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn write_atomically<T: Serialize>(path: &Path, entries: &[T]) -> PersistResult<()> {
    let body = serde_json::to_string_pretty(entries).map_err(PersistError::Encode)?;
    let io_err = |source: std::io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(io_err)?;
            parent
        }
        None => Path::new("."),
    };

    // Dropping an unpersisted staging file deletes it.
    let mut staging = NamedTempFile::new_in(parent).map_err(io_err)?;
    staging.write_all(body.as_bytes()).map_err(io_err)?;
    staging.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}
