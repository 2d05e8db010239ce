//! Line renderers and report file writers.

use super::{format_cents, ReportError, ReportResult};
use crate::model::finance::{AccountSummary, Transaction};
use crate::model::patient::{Patient, Prescription};
use crate::model::stock::{InventoryItem, StockItem};
use crate::model::student::Student;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// `<name> (ID: <id>): Score = <score>, Grade = <letter>`
pub fn student_line(student: &Student) -> String {
    format!(
        "{} (ID: {}): Score = {}, Grade = {}",
        student.name,
        student.id,
        student.score,
        student.grade()
    )
}

/// Writes one `student_line` per student to `path`, replacing its content.
pub fn write_grade_report(path: impl AsRef<Path>, students: &[Student]) -> ReportResult<usize> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for student in students {
        writeln!(writer, "{}", student_line(student)).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    info!(
        "event=grade_report module=report status=ok lines={} path={}",
        students.len(),
        path.display()
    );
    Ok(students.len())
}

/// Patient header followed by one indented line per prescription.
pub fn prescription_lines(patient: &Patient, prescriptions: &[&Prescription]) -> Vec<String> {
    let mut lines = vec![format!(
        "Patient {} (ID: {}, age {})",
        patient.name, patient.id, patient.age
    )];
    if prescriptions.is_empty() {
        lines.push("  no prescriptions on file".to_string());
        return lines;
    }
    lines.extend(
        prescriptions
            .iter()
            .map(|rx| format!("  #{} {}: {}", rx.id, rx.medication, rx.dosage)),
    );
    lines
}

pub fn transaction_line(tx: &Transaction) -> String {
    format!(
        "#{} account {} {} {} ({})",
        tx.id,
        tx.account_id,
        tx.kind.label(),
        format_cents(tx.amount_cents),
        tx.description
    )
}

pub fn account_summary_line(summary: &AccountSummary) -> String {
    format!(
        "Account {}: {} transactions, deposits {}, withdrawals {}, balance {}",
        summary.account_id,
        summary.transaction_count,
        format_cents(summary.deposits_cents),
        format_cents(summary.withdrawals_cents),
        format_cents(summary.balance_cents())
    )
}

pub fn stock_line(item: &StockItem) -> String {
    format!(
        "[{}] {} qty={} unit={} value={}",
        item.id,
        item.name,
        item.quantity,
        format_cents(item.unit_price_cents),
        format_cents(item.stock_value_cents())
    )
}

pub fn inventory_line(item: &InventoryItem) -> String {
    format!("[{}] {} x{}", item.id, item.name, item.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::finance::TransactionKind;

    #[test]
    fn student_line_matches_report_format() {
        let student = Student::new(7, "Jane Doe", 85);
        assert_eq!(
            student_line(&student),
            "Jane Doe (ID: 7): Score = 85, Grade = A"
        );
    }

    #[test]
    fn grade_report_has_one_line_per_student() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let students = vec![Student::new(1, "Ann", 72), Student::new(2, "Bob", 49)];

        assert_eq!(write_grade_report(&path, &students).unwrap(), 2);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Ann (ID: 1): Score = 72, Grade = B\nBob (ID: 2): Score = 49, Grade = F\n"
        );
    }

    #[test]
    fn prescription_lines_without_prescriptions() {
        let patient = Patient::new(3, "Cid", 40);
        let lines = prescription_lines(&patient, &[]);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("no prescriptions"));
    }

    #[test]
    fn transaction_line_shows_kind_and_amount() {
        let tx = Transaction::new(4, 1, TransactionKind::Withdrawal, 1_999, "groceries");
        assert_eq!(
            transaction_line(&tx),
            "#4 account 1 withdrawal 19.99 (groceries)"
        );
    }
}
