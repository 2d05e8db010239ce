//! Record domain model.
//!
//! # Responsibility
//! - Define the plain data records owned by repositories.
//! - Expose a single `Entity` contract so repositories stay generic.
//!
//! # Invariants
//! - Every record is identified by a stable integer key.
//! - Records validate themselves before a repository accepts them.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod finance;
pub mod patient;
pub mod stock;
pub mod student;

/// Integer key used by every record type in this crate.
pub type RecordId = u32;

/// Contract shared by every record a repository can own.
pub trait Entity {
    /// Returns the record's primary key.
    fn id(&self) -> RecordId;

    /// Checks record-level invariants.
    ///
    /// Defaults to always valid for records without constraints.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Record-level invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName {
        id: RecordId,
    },
    NegativeQuantity {
        id: RecordId,
        quantity: i64,
    },
    NonPositiveAmount {
        id: RecordId,
        amount_cents: i64,
    },
    NegativePrice {
        id: RecordId,
        unit_price_cents: i64,
    },
    ScoreOutOfRange {
        id: RecordId,
        score: u32,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { id } => write!(f, "record {id} has an empty name"),
            Self::NegativeQuantity { id, quantity } => {
                write!(f, "record {id} has negative quantity {quantity}")
            }
            Self::NonPositiveAmount { id, amount_cents } => write!(
                f,
                "record {id} has non-positive amount {}",
                crate::report::format_cents(*amount_cents)
            ),
            Self::NegativePrice {
                id,
                unit_price_cents,
            } => write!(
                f,
                "record {id} has negative unit price {}",
                crate::report::format_cents(*unit_price_cents)
            ),
            Self::ScoreOutOfRange { id, score } => {
                write!(f, "record {id} has score {score} outside 0..=100")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_name(id: RecordId, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { id });
    }
    Ok(())
}
