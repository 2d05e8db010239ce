//! Warehouse stock use-case service.
//!
//! # Responsibility
//! - Maintain unique stock lines with quantity updates.
//! - Emit diagnostic events for rejected mutations.
//!
//! # Invariants
//! - Errors are returned unchanged to the caller after being logged; the
//!   caller decides whether to continue.

use crate::model::stock::StockItem;
use crate::model::RecordId;
use crate::repo::indexed_repo::IndexedRepository;
use crate::repo::{RepoResult, Repository};
use log::{info, warn};

#[derive(Debug, Default)]
pub struct WarehouseService {
    stock: IndexedRepository<StockItem>,
}

impl WarehouseService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: StockItem) -> RepoResult<()> {
        let id = item.id;
        match self.stock.add(item) {
            Ok(()) => {
                info!("event=stock_add module=service status=ok item_id={id}");
                Ok(())
            }
            Err(err) => {
                warn!("event=stock_add module=service status=error item_id={id} error={err}");
                Err(err)
            }
        }
    }

    pub fn remove_item(&mut self, id: RecordId) -> RepoResult<StockItem> {
        self.stock.remove(id).inspect_err(|err| {
            warn!("event=stock_remove module=service status=error item_id={id} error={err}");
        })
    }

    /// Sets the stocked quantity for one item.
    pub fn update_stock(&mut self, id: RecordId, quantity: i64) -> RepoResult<&StockItem> {
        self.stock.update_quantity(id, quantity).inspect_err(|err| {
            warn!("event=stock_update module=service status=error item_id={id} error={err}");
        })
    }

    pub fn item(&self, id: RecordId) -> RepoResult<&StockItem> {
        self.stock.get(id)
    }

    pub fn items(&self) -> Vec<&StockItem> {
        self.stock.list_all()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Combined value of all lines, saturating at `i64::MAX`.
    pub fn total_stock_value_cents(&self) -> i64 {
        self.stock
            .iter()
            .map(StockItem::stock_value_cents)
            .fold(0i64, i64::saturating_add)
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<&StockItem> {
        self.stock.scan(|item| item.quantity < threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::RepoError;

    #[test]
    fn value_and_low_stock_queries() {
        let mut service = WarehouseService::new();
        service.add_item(StockItem::new(1, "pallet", 2, 1_500)).unwrap();
        service.add_item(StockItem::new(2, "crate", 30, 250)).unwrap();

        assert_eq!(service.total_stock_value_cents(), 2 * 1_500 + 30 * 250);
        let low: Vec<_> = service.low_stock(5).iter().map(|i| i.id).collect();
        assert_eq!(low, vec![1]);
    }

    #[test]
    fn total_value_saturates() {
        let mut service = WarehouseService::new();
        service
            .add_item(StockItem::new(1, "pallet", i64::MAX, 1))
            .unwrap();
        service.add_item(StockItem::new(2, "crate", 1, 1)).unwrap();
        assert_eq!(service.total_stock_value_cents(), i64::MAX);
    }

    #[test]
    fn update_stock_surfaces_errors() {
        let mut service = WarehouseService::new();
        service.add_item(StockItem::new(1, "pallet", 2, 1_500)).unwrap();

        assert!(matches!(
            service.update_stock(1, -4),
            Err(RepoError::InvalidArgument(_))
        ));
        assert_eq!(service.item(1).unwrap().quantity, 2);
        assert_eq!(service.update_stock(9, 4).unwrap_err(), RepoError::NotFound(9));
    }
}
