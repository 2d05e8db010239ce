//! Student records and letter-grade mapping.
//!
//! # Invariants
//! - A stored `Student` always has `score <= MAX_SCORE`.
//! - Grade buckets are closed on both ends and do not overlap.

use super::{require_name, Entity, RecordId, ValidationError};
use std::fmt::{Display, Formatter};

/// Highest score accepted by the grading pipeline.
pub const MAX_SCORE: u32 = 100;

/// One graded student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub score: u32,
}

impl Student {
    pub fn new(id: RecordId, name: impl Into<String>, score: u32) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }

    /// Letter grade for this student's score.
    ///
    /// Falls back to `F` for an out-of-range score that bypassed validation.
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score).unwrap_or(Grade::F)
    }
}

impl Entity for Student {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_name(self.id, &self.name)?;
        if self.score > MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange {
                id: self.id,
                score: self.score,
            });
        }
        Ok(())
    }
}

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades from best to worst.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Maps a score to its letter.
    ///
    /// Returns `None` for scores above `MAX_SCORE`.
    pub fn from_score(score: u32) -> Option<Self> {
        let grade = match score {
            80..=MAX_SCORE => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            0..=49 => Self::F,
            _ => return None,
        };
        Some(grade)
    }

    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
