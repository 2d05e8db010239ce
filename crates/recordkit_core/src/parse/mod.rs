//! Line-record input parsers.
//!
//! # Responsibility
//! - Turn delimiter-separated text into validated records.
//!
//! # Invariants
//! - One malformed line aborts the whole read; no partial result is returned.

pub mod grade_file;

pub use grade_file::{GradeFileError, GradeFileResult};
