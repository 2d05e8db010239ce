//! Account transaction records.
//!
//! # Invariants
//! - `amount_cents` is always positive; direction is carried by `kind`.

use super::{Entity, RecordId, ValidationError};

/// Direction of a transaction relative to its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }
}

/// One money movement on an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: RecordId,
    pub account_id: RecordId,
    pub kind: TransactionKind,
    /// Unsigned magnitude in cents.
    pub amount_cents: i64,
    pub description: String,
}

impl Transaction {
    pub fn new(
        id: RecordId,
        account_id: RecordId,
        kind: TransactionKind,
        amount_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            account_id,
            kind,
            amount_cents,
            description: description.into(),
        }
    }

    /// Returns the amount with the sign applied for balance math.
    pub fn signed_cents(&self) -> i64 {
        match self.kind {
            TransactionKind::Deposit => self.amount_cents,
            TransactionKind::Withdrawal => -self.amount_cents,
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.amount_cents <= 0 {
            return Err(ValidationError::NonPositiveAmount {
                id: self.id,
                amount_cents: self.amount_cents,
            });
        }
        Ok(())
    }
}

/// Derived per-account totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub account_id: RecordId,
    pub transaction_count: usize,
    pub deposits_cents: i64,
    pub withdrawals_cents: i64,
}

impl AccountSummary {
    /// Deposits minus withdrawals, saturating at the `i64` bounds.
    pub fn balance_cents(&self) -> i64 {
        self.deposits_cents.saturating_sub(self.withdrawals_cents)
    }
}
