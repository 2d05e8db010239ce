//! Warehouse stock and inventory-log records.
//!
//! # Invariants
//! - Quantities are never negative for a stored record.
//! - Unit prices are never negative for a stored stock line.
//! - `InventoryItem` field names are the persisted JSON keys; renaming a
//!   field breaks existing log files.

use super::{require_name, Entity, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Stock line held by the warehouse repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl StockItem {
    pub fn new(id: RecordId, name: impl Into<String>, quantity: i64, unit_price_cents: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            unit_price_cents,
        }
    }

    /// Replaces the quantity after checking it is non-negative.
    ///
    /// The stored value is untouched on error.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ValidationError> {
        check_quantity(self.id, quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn stock_value_cents(&self) -> i64 {
        self.quantity.saturating_mul(self.unit_price_cents)
    }
}

impl Entity for StockItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_name(self.id, &self.name)?;
        check_quantity(self.id, self.quantity)?;
        if self.unit_price_cents < 0 {
            return Err(ValidationError::NegativePrice {
                id: self.id,
                unit_price_cents: self.unit_price_cents,
            });
        }
        Ok(())
    }
}

/// Entry of the file-backed inventory log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
}

impl InventoryItem {
    pub fn new(id: RecordId, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

impl Entity for InventoryItem {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_name(self.id, &self.name)?;
        check_quantity(self.id, self.quantity)
    }
}

fn check_quantity(id: RecordId, quantity: i64) -> Result<(), ValidationError> {
    if quantity < 0 {
        return Err(ValidationError::NegativeQuantity { id, quantity });
    }
    Ok(())
}
