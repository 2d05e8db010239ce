//! Unindexed repository backed by an insertion-ordered `Vec`.
//!
//! # Invariants
//! - Duplicate ids are permitted; id lookups return the first match.
//! - Every lookup is a linear scan.

use super::{RepoError, RepoResult, Repository};
use crate::model::{Entity, RecordId};

/// Linear-scan repository that keeps records in insertion order.
#[derive(Debug, Clone)]
pub struct VecRepository<T> {
    items: Vec<T>,
}

impl<T> Default for VecRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> VecRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates records in insertion order without allocating.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrowed snapshot for derived views such as `GroupIndex`.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Entity> Repository<T> for VecRepository<T> {
    fn add(&mut self, entity: T) -> RepoResult<()> {
        entity.validate()?;
        self.items.push(entity);
        Ok(())
    }

    fn get(&self, id: RecordId) -> RepoResult<&T> {
        self.items
            .iter()
            .find(|entity| entity.id() == id)
            .ok_or(RepoError::NotFound(id))
    }

    fn remove(&mut self, id: RecordId) -> RepoResult<T> {
        let position = self
            .items
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.items.remove(position))
    }

    fn remove_first_where<F>(&mut self, filter: F) -> RepoResult<T>
    where
        F: Fn(&T) -> bool,
    {
        let position = self
            .items
            .iter()
            .position(|entity| filter(entity))
            .ok_or(RepoError::NoMatch)?;
        Ok(self.items.remove(position))
    }

    fn list_all(&self) -> Vec<&T> {
        self.items.iter().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Entity> FromIterator<T> for VecRepository<T> {
    /// Collects records without validation; used for trusted snapshots.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
