//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the generic add/get/remove/list contract over `Entity` records.
//! - Provide an unindexed (linear scan) and an indexed (unique id) variant.
//! - Build derived group views over repository snapshots.
//!
//! # Invariants
//! - Write paths call `Entity::validate()` before mutating state.
//! - A failed operation leaves the repository unchanged.
//! - Iteration order is insertion order for both variants.

use crate::model::{Entity, RecordId, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod group_index;
pub mod indexed_repo;
pub mod vec_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateKey(RecordId),
    NotFound(RecordId),
    /// A filter-based operation found nothing to act on.
    NoMatch,
    InvalidArgument(String),
    Validation(ValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(id) => write!(f, "record with id {id} already exists"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::NoMatch => write!(f, "no record matches the filter"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface over one record type.
///
/// Id accessors are the primary API. `find_first`, `scan` and
/// `remove_first_where` are explicit linear scans.
pub trait Repository<T: Entity> {
    fn add(&mut self, entity: T) -> RepoResult<()>;
    fn get(&self, id: RecordId) -> RepoResult<&T>;
    fn remove(&mut self, id: RecordId) -> RepoResult<T>;
    fn remove_first_where<F>(&mut self, filter: F) -> RepoResult<T>
    where
        F: Fn(&T) -> bool;
    fn list_all(&self) -> Vec<&T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_ok()
    }

    /// Returns the first record accepted by `filter`, scanning in order.
    fn find_first<F>(&self, filter: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.list_all().into_iter().find(|entity| filter(entity))
    }

    /// Returns every record accepted by `filter`, in order.
    fn scan<F>(&self, filter: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.list_all()
            .into_iter()
            .filter(|entity| filter(entity))
            .collect()
    }
}
