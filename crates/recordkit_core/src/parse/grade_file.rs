//! Grading input reader.
//!
//! Input is one `id,name,score` record per line. Fields are trimmed and blank
//! lines are skipped. Line numbers in errors are 1-based.

use crate::model::student::{Student, MAX_SCORE};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const FIELD_DELIMITER: char = ',';
pub const FIELD_COUNT: usize = 3;

pub type GradeFileResult<T> = Result<T, GradeFileError>;

/// Failures while reading a grading input file.
#[derive(Debug)]
pub enum GradeFileError {
    /// Field count differs from `FIELD_COUNT`.
    MissingField {
        line: usize,
        expected: usize,
        found: usize,
        content: String,
    },
    /// A numeric field holds something that is not an unsigned integer.
    InvalidFormat {
        line: usize,
        field: &'static str,
        value: String,
    },
    ScoreOutOfRange {
        line: usize,
        score: u32,
    },
    EmptyName {
        line: usize,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for GradeFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField {
                line,
                expected,
                found,
                content,
            } => write!(
                f,
                "line {line}: expected {expected} fields, found {found} in `{content}`"
            ),
            Self::InvalidFormat { line, field, value } => {
                write!(f, "line {line}: `{value}` is not a valid {field}")
            }
            Self::ScoreOutOfRange { line, score } => {
                write!(f, "line {line}: score {score} is outside 0..={MAX_SCORE}")
            }
            Self::EmptyName { line } => write!(f, "line {line}: name is empty"),
            Self::Io { path, source } => {
                write!(f, "cannot read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for GradeFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses one record line.
pub fn parse_line(line: &str, line_no: usize) -> GradeFileResult<Student> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(GradeFileError::MissingField {
            line: line_no,
            expected: FIELD_COUNT,
            found: fields.len(),
            content: line.to_string(),
        });
    }

    let id = parse_number(fields[0], "id", line_no)?;
    let name = fields[1];
    let score = parse_number(fields[2], "score", line_no)?;

    if name.is_empty() {
        return Err(GradeFileError::EmptyName { line: line_no });
    }
    if score > MAX_SCORE {
        return Err(GradeFileError::ScoreOutOfRange {
            line: line_no,
            score,
        });
    }

    Ok(Student::new(id, name, score))
}

/// Parses a whole document held in memory.
pub fn parse_str(text: &str) -> GradeFileResult<Vec<Student>> {
    let mut students = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_line(line, index + 1)?);
    }
    Ok(students)
}

/// Reads and parses a grading input file.
pub fn read_file(path: impl AsRef<Path>) -> GradeFileResult<Vec<Student>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| GradeFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_str(&text) {
        Ok(students) => {
            info!(
                "event=grade_read module=parse status=ok records={} path={}",
                students.len(),
                path.display()
            );
            Ok(students)
        }
        Err(err) => {
            warn!("event=grade_read module=parse status=error error={err}");
            Err(err)
        }
    }
}

/// Accepts plain decimal digits only; signs are rejected.
fn parse_number(value: &str, field: &'static str, line_no: usize) -> GradeFileResult<u32> {
    let invalid = || GradeFileError::InvalidFormat {
        line: line_no,
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
