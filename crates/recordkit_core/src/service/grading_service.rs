//! Grade report use-case service.
//!
//! # Responsibility
//! - Load a roster from a grading input file.
//! - Write the letter-grade report and summarize the distribution.
//!
//! # Invariants
//! - A failed load leaves the previous roster untouched.

use crate::model::student::{Grade, Student};
use crate::parse::grade_file::{self, GradeFileError};
use crate::repo::vec_repo::VecRepository;
use crate::repo::Repository;
use crate::report::{write_grade_report, ReportError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug)]
pub enum GradingError {
    Input(GradeFileError),
    Report(ReportError),
}

impl Display for GradingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "grading input rejected: {err}"),
            Self::Report(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GradingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Report(err) => Some(err),
        }
    }
}

impl From<GradeFileError> for GradingError {
    fn from(value: GradeFileError) -> Self {
        Self::Input(value)
    }
}

impl From<ReportError> for GradingError {
    fn from(value: ReportError) -> Self {
        Self::Report(value)
    }
}

/// Aggregate view of one graded roster.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub count: usize,
    /// `None` for an empty roster.
    pub average: Option<f64>,
    counts: [usize; Grade::ALL.len()],
}

impl GradeSummary {
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        let mut counts = [0usize; Grade::ALL.len()];
        let mut count = 0usize;
        let mut total = 0u64;
        for student in students {
            counts[slot(student.grade())] += 1;
            count += 1;
            total += u64::from(student.score);
        }
        let average = (count > 0).then(|| total as f64 / count as f64);
        Self {
            count,
            average,
            counts,
        }
    }

    pub fn count_for(&self, grade: Grade) -> usize {
        self.counts[slot(grade)]
    }

    /// `(grade, count)` pairs from best to worst.
    pub fn distribution(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.iter().map(|grade| (*grade, self.count_for(*grade)))
    }
}

fn slot(grade: Grade) -> usize {
    match grade {
        Grade::A => 0,
        Grade::B => 1,
        Grade::C => 2,
        Grade::D => 3,
        Grade::F => 4,
    }
}

#[derive(Debug, Default)]
pub struct GradingService {
    roster: VecRepository<Student>,
}

impl GradingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster with the parsed content of `input`.
    pub fn load(&mut self, input: impl AsRef<Path>) -> Result<usize, GradingError> {
        let students = grade_file::read_file(input)?;
        self.roster = students.into_iter().collect();
        Ok(self.roster.len())
    }

    pub fn students(&self) -> Vec<&Student> {
        self.roster.list_all()
    }

    pub fn write_report(&self, output: impl AsRef<Path>) -> Result<usize, GradingError> {
        Ok(write_grade_report(output, self.roster.as_slice())?)
    }

    pub fn summary(&self) -> GradeSummary {
        GradeSummary::from_students(self.roster.iter())
    }

    /// Loads `input`, writes the report to `output` and returns the summary.
    pub fn grade_file(
        &mut self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<GradeSummary, GradingError> {
        self.load(input)?;
        self.write_report(output)?;
        Ok(self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_each_grade() {
        let students = [
            Student::new(1, "Ann", 95),
            Student::new(2, "Bob", 80),
            Student::new(3, "Cid", 55),
            Student::new(4, "Dee", 10),
        ];
        let summary = GradeSummary::from_students(&students);

        assert_eq!(summary.count, 4);
        assert_eq!(summary.average, Some(60.0));
        assert_eq!(summary.count_for(Grade::A), 2);
        assert_eq!(summary.count_for(Grade::B), 0);
        assert_eq!(summary.count_for(Grade::D), 1);
        assert_eq!(summary.count_for(Grade::F), 1);
        assert_eq!(summary.distribution().count(), 5);
    }

    #[test]
    fn empty_roster_has_no_average() {
        let summary = GradingService::new().summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, None);
    }

    #[test]
    fn failed_load_keeps_previous_roster() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        std::fs::write(&good, "1,Ann,90\n2,Bob,65\n").unwrap();
        std::fs::write(&bad, "1,Ann,90\n2,Bob\n").unwrap();

        let mut service = GradingService::new();
        assert_eq!(service.load(&good).unwrap(), 2);
        assert!(matches!(
            service.load(&bad),
            Err(GradingError::Input(GradeFileError::MissingField { .. }))
        ));
        assert_eq!(service.students().len(), 2);
    }
}
