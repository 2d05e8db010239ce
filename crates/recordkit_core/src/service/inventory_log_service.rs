//! File-backed inventory log use-case service.
//!
//! # Responsibility
//! - Bind a `PersistentLog<InventoryItem>` to one file path.
//! - Validate items before they are buffered.
//!
//! # Invariants
//! - `record` never writes to disk; only `save` does.
//! - `load` replaces the buffer wholesale or not at all, and only with items
//!   that pass validation.

use crate::model::stock::InventoryItem;
use crate::model::{Entity, ValidationError};
use crate::persist::{PersistResult, PersistentLog, ReloadOutcome};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct InventoryLogService {
    log: PersistentLog<InventoryItem>,
    path: PathBuf,
}

impl InventoryLogService {
    /// Creates an empty log bound to `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            log: PersistentLog::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Buffers a validated item in memory.
    pub fn record(&mut self, item: InventoryItem) -> Result<(), ValidationError> {
        item.validate()?;
        self.log.append(item);
        Ok(())
    }

    /// Writes the whole buffer to the bound file.
    pub fn save(&self) -> PersistResult<usize> {
        self.log.flush(&self.path)
    }

    /// Replaces the buffer with the bound file's content.
    ///
    /// Unsaved items are discarded when the file is loaded. A file holding an
    /// invalid item is rejected with `PersistError::Invalid`.
    pub fn load(&mut self) -> PersistResult<ReloadOutcome> {
        self.log.replace_all_from(&self.path)
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.log.entries()
    }

    /// Sum of all quantities, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.log
            .entries()
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_save_load_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");

        let mut writer = InventoryLogService::new(&path);
        writer.record(InventoryItem::new(1, "bolt", 10)).unwrap();
        writer.record(InventoryItem::new(2, "nut", 15)).unwrap();
        assert_eq!(writer.save().unwrap(), 2);

        let mut reader = InventoryLogService::new(&path);
        assert_eq!(reader.load().unwrap(), ReloadOutcome::Loaded(2));
        assert_eq!(reader.items(), writer.items());
        assert_eq!(reader.total_quantity(), 25);
    }

    #[test]
    fn total_quantity_saturates() {
        let mut service = InventoryLogService::new("unused.json");
        service.record(InventoryItem::new(1, "bolt", i64::MAX)).unwrap();
        service.record(InventoryItem::new(2, "nut", 1)).unwrap();
        assert_eq!(service.total_quantity(), i64::MAX);
    }

    #[test]
    fn invalid_item_is_not_buffered() {
        let mut service = InventoryLogService::new("unused.json");
        let err = service.record(InventoryItem::new(1, "bolt", -1)).unwrap_err();
        assert_eq!(err, ValidationError::NegativeQuantity { id: 1, quantity: -1 });
        assert!(service.items().is_empty());
    }
}
