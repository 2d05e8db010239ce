//! Sample records for the walkthrough commands.

use recordkit_core::{Patient, Prescription, StockItem, Transaction, TransactionKind};

pub fn stock_items() -> Vec<StockItem> {
    vec![
        StockItem::new(1, "steel shelf", 12, 4_500),
        StockItem::new(2, "storage bin", 40, 350),
        StockItem::new(3, "step ladder", 3, 9_900),
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient::new(1, "Alice Moreau", 34),
        Patient::new(2, "Ben Okafor", 61),
        Patient::new(3, "Chen Wei", 18),
    ]
}

pub fn prescriptions() -> Vec<Prescription> {
    vec![
        Prescription::new(101, 1, "ibuprofen", "200mg twice daily"),
        Prescription::new(102, 2, "atorvastatin", "10mg nightly"),
        Prescription::new(103, 1, "vitamin d", "1000iu daily"),
        Prescription::new(104, 2, "metformin", "500mg with meals"),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    use TransactionKind::{Deposit, Withdrawal};
    vec![
        Transaction::new(1, 1001, Deposit, 250_000, "salary"),
        Transaction::new(2, 1002, Deposit, 40_000, "transfer in"),
        Transaction::new(3, 1001, Withdrawal, 120_000, "rent"),
        Transaction::new(4, 1001, Withdrawal, 8_450, "groceries"),
        Transaction::new(5, 1002, Withdrawal, 1_999, "subscription"),
    ]
}
