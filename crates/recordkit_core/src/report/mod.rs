//! Human-readable text rendering of records and derived values.
//!
//! # Responsibility
//! - Produce stable single-line renderings for console and report files.
//! - Write report files wholesale.
//!
//! # Invariants
//! - Formatting functions are pure; only `write_*` functions touch disk.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod text;

pub use text::{
    account_summary_line, inventory_line, prescription_lines, stock_line, student_line,
    transaction_line, write_grade_report,
};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug)]
pub enum ReportError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot write report `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Formats a cent amount as `units.cents`, e.g. `-12.05`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100)
}

#[cfg(test)]
mod tests {
    use super::format_cents;

    #[test]
    fn format_cents_pads_and_signs() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(123_456), "1234.56");
        assert_eq!(format_cents(-1_205), "-12.05");
        assert_eq!(format_cents(i64::MIN), "-92233720368547758.08");
    }
}
