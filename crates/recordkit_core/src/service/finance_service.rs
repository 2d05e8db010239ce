//! Account transaction use-case service.

use crate::model::finance::{AccountSummary, Transaction, TransactionKind};
use crate::model::RecordId;
use crate::repo::group_index::GroupIndex;
use crate::repo::vec_repo::VecRepository;
use crate::repo::{RepoResult, Repository};

/// Records transactions and derives per-account totals.
#[derive(Debug, Default)]
pub struct FinanceService {
    transactions: VecRepository<Transaction>,
}

impl FinanceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: Transaction) -> RepoResult<()> {
        self.transactions.add(transaction)
    }

    pub fn transaction(&self, id: RecordId) -> RepoResult<&Transaction> {
        self.transactions.get(id)
    }

    pub fn transactions(&self) -> Vec<&Transaction> {
        self.transactions.list_all()
    }

    pub fn transactions_for(&self, account_id: RecordId) -> Vec<&Transaction> {
        self.transactions.scan(|tx| tx.account_id == account_id)
    }

    /// Per-account totals in first-seen account order.
    pub fn summaries(&self) -> Vec<AccountSummary> {
        let index = GroupIndex::build(self.transactions.iter(), |tx| tx.account_id);
        index
            .iter()
            .map(|(account_id, group)| summarize(*account_id, group))
            .collect()
    }

    /// Totals for one account, or `None` when it has no transactions.
    pub fn summary(&self, account_id: RecordId) -> Option<AccountSummary> {
        let group = self.transactions_for(account_id);
        if group.is_empty() {
            return None;
        }
        Some(summarize(account_id, &group))
    }

    /// Deposits minus withdrawals; `0` for an unknown account.
    ///
    /// Saturates at the `i64` bounds.
    pub fn balance(&self, account_id: RecordId) -> i64 {
        self.transactions_for(account_id)
            .iter()
            .fold(0i64, |total, tx| total.saturating_add(tx.signed_cents()))
    }

    /// Largest transaction by amount; the earliest wins a tie.
    pub fn largest_transaction(&self) -> Option<&Transaction> {
        self.transactions
            .iter()
            .fold(None, |best: Option<&Transaction>, tx| match best {
                Some(current) if current.amount_cents >= tx.amount_cents => Some(current),
                _ => Some(tx),
            })
    }
}

fn summarize(account_id: RecordId, group: &[&Transaction]) -> AccountSummary {
    let mut summary = AccountSummary {
        account_id,
        transaction_count: group.len(),
        deposits_cents: 0,
        withdrawals_cents: 0,
    };
    for tx in group {
        match tx.kind {
            TransactionKind::Deposit => {
                summary.deposits_cents = summary.deposits_cents.saturating_add(tx.amount_cents)
            }
            TransactionKind::Withdrawal => {
                summary.withdrawals_cents =
                    summary.withdrawals_cents.saturating_add(tx.amount_cents)
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::RepoError;

    fn seeded() -> FinanceService {
        let mut service = FinanceService::new();
        let rows = [
            (1, 100, TransactionKind::Deposit, 50_000),
            (2, 200, TransactionKind::Deposit, 10_000),
            (3, 100, TransactionKind::Withdrawal, 12_550),
            (4, 100, TransactionKind::Deposit, 2_500),
        ];
        for (id, account, kind, cents) in rows {
            service
                .record(Transaction::new(id, account, kind, cents, "seed"))
                .unwrap();
        }
        service
    }

    #[test]
    fn balance_is_deposits_minus_withdrawals() {
        let service = seeded();
        assert_eq!(service.balance(100), 39_950);
        assert_eq!(service.balance(200), 10_000);
        assert_eq!(service.balance(300), 0);
    }

    #[test]
    fn summaries_follow_first_seen_accounts() {
        let summaries = seeded().summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].account_id, 100);
        assert_eq!(summaries[0].transaction_count, 3);
        assert_eq!(summaries[0].withdrawals_cents, 12_550);
        assert_eq!(summaries[1].account_id, 200);
    }

    #[test]
    fn largest_transaction_picks_max_amount() {
        assert_eq!(seeded().largest_transaction().map(|tx| tx.id), Some(1));
        assert!(FinanceService::new().largest_transaction().is_none());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut service = FinanceService::new();
        service
            .record(Transaction::new(1, 1, TransactionKind::Deposit, i64::MAX, "max"))
            .unwrap();
        service
            .record(Transaction::new(2, 1, TransactionKind::Deposit, 1, "one"))
            .unwrap();
        service
            .record(Transaction::new(3, 2, TransactionKind::Withdrawal, i64::MAX, "max"))
            .unwrap();
        service
            .record(Transaction::new(4, 2, TransactionKind::Withdrawal, 5, "five"))
            .unwrap();

        assert_eq!(service.balance(1), i64::MAX);
        assert_eq!(service.balance(2), i64::MIN);

        let summaries = service.summaries();
        assert_eq!(summaries[0].deposits_cents, i64::MAX);
        assert_eq!(summaries[0].balance_cents(), i64::MAX);
        assert_eq!(summaries[1].withdrawals_cents, i64::MAX);
        assert_eq!(summaries[1].balance_cents(), -i64::MAX);
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut service = FinanceService::new();
        let err = service
            .record(Transaction::new(1, 1, TransactionKind::Deposit, -5, "bad"))
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(service.transactions().is_empty());
    }
}
