//! Indexed repository keyed by record id.
//!
//! # Responsibility
//! - Enforce id uniqueness on insert.
//! - Provide O(1) id lookup while keeping insertion order for listing.
//!
//! # Invariants
//! - Map key always equals `entity.id()`.
//! - Removal uses `shift_remove`, so survivors keep their relative order.

use super::{RepoError, RepoResult, Repository};
use crate::model::stock::StockItem;
use crate::model::{Entity, RecordId, ValidationError};
use indexmap::IndexMap;

/// Unique-id repository backed by an order-preserving map.
#[derive(Debug, Clone)]
pub struct IndexedRepository<T> {
    items: IndexMap<RecordId, T>,
}

impl<T> Default for IndexedRepository<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T: Entity> IndexedRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates records in insertion order without allocating.
    pub fn iter(&self) -> indexmap::map::Values<'_, RecordId, T> {
        self.items.values()
    }

    /// Applies `change` to a copy of the record and stores it only when the
    /// change and the follow-up validation both succeed.
    pub fn update_with<F>(&mut self, id: RecordId, change: F) -> RepoResult<&T>
    where
        T: Clone,
        F: FnOnce(&mut T) -> Result<(), ValidationError>,
    {
        let slot = self.items.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        let mut draft = slot.clone();
        change(&mut draft)?;
        draft.validate()?;
        if draft.id() != id {
            return Err(RepoError::InvalidArgument(format!(
                "update may not change record id {id} to {}",
                draft.id()
            )));
        }
        *slot = draft;
        Ok(&*slot)
    }
}

impl IndexedRepository<StockItem> {
    /// Sets the stored quantity of one stock line.
    ///
    /// # Errors
    /// - `InvalidArgument` when `quantity` is negative; stored value unchanged.
    /// - `NotFound` when `id` is absent.
    pub fn update_quantity(&mut self, id: RecordId, quantity: i64) -> RepoResult<&StockItem> {
        if quantity < 0 {
            return Err(RepoError::InvalidArgument(format!(
                "quantity for item {id} must not be negative, got {quantity}"
            )));
        }
        self.update_with(id, |item| item.set_quantity(quantity))
    }
}

impl<T: Entity> Repository<T> for IndexedRepository<T> {
    fn add(&mut self, entity: T) -> RepoResult<()> {
        entity.validate()?;
        let id = entity.id();
        if self.items.contains_key(&id) {
            return Err(RepoError::DuplicateKey(id));
        }
        self.items.insert(id, entity);
        Ok(())
    }

    fn get(&self, id: RecordId) -> RepoResult<&T> {
        self.items.get(&id).ok_or(RepoError::NotFound(id))
    }

    fn remove(&mut self, id: RecordId) -> RepoResult<T> {
        self.items.shift_remove(&id).ok_or(RepoError::NotFound(id))
    }

    fn remove_first_where<F>(&mut self, filter: F) -> RepoResult<T>
    where
        F: Fn(&T) -> bool,
    {
        let index = self
            .items
            .values()
            .position(|entity| filter(entity))
            .ok_or(RepoError::NoMatch)?;
        self.items
            .shift_remove_index(index)
            .map(|(_, entity)| entity)
            .ok_or(RepoError::NoMatch)
    }

    fn list_all(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, id: RecordId) -> bool {
        self.items.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: RecordId, quantity: i64) -> StockItem {
        StockItem::new(id, format!("item-{id}"), quantity, 100)
    }

    #[test]
    fn add_then_get_returns_same_record() {
        let mut repo = IndexedRepository::new();
        repo.add(item(7, 3)).unwrap();
        assert_eq!(repo.get(7).unwrap(), &item(7, 3));
    }

    #[test]
    fn duplicate_add_is_rejected_and_keeps_original() {
        let mut repo = IndexedRepository::new();
        repo.add(item(1, 5)).unwrap();

        let err = repo.add(item(1, 99)).unwrap_err();
        assert_eq!(err, RepoError::DuplicateKey(1));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().quantity, 5);
    }

    #[test]
    fn remove_preserves_order_of_remaining_records() {
        let mut repo = IndexedRepository::new();
        for id in [4, 2, 9, 1] {
            repo.add(item(id, 1)).unwrap();
        }
        repo.remove(2).unwrap();

        let ids: Vec<_> = repo.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 9, 1]);
    }

    #[test]
    fn negative_quantity_update_is_rejected() {
        let mut repo = IndexedRepository::new();
        repo.add(item(1, 5)).unwrap();

        let err = repo.update_quantity(1, -3).unwrap_err();
        assert!(matches!(err, RepoError::InvalidArgument(_)));
        assert_eq!(repo.get(1).unwrap().quantity, 5);

        assert_eq!(repo.update_quantity(1, 8).unwrap().quantity, 8);
        assert_eq!(repo.update_quantity(2, 8).unwrap_err(), RepoError::NotFound(2));
    }

    #[test]
    fn update_with_rejects_id_change() {
        let mut repo = IndexedRepository::new();
        repo.add(item(1, 5)).unwrap();

        let err = repo
            .update_with(1, |i| {
                i.id = 2;
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, RepoError::InvalidArgument(_)));
        assert!(repo.contains(1));
        assert!(!repo.contains(2));
    }
}
