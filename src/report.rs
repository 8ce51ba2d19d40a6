//! Report data model
//!
//! A report is an ordered, non-empty run of integer levels. Order defines
//! adjacency for delta computation, so nothing here ever reorders levels.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single reading within a report
pub type Level = i64;

/// Signed difference between two adjacent levels
///
/// Wider than `Level` so the difference of any two levels is exact.
pub type Delta = i128;

/// Errors raised when building or deriving a report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid report: a report needs at least one level")]
    Empty,

    #[error("Level index {index} out of range for report of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, immutable sequence of levels (length >= 1)
///
/// # Example
/// ```
/// use vigia::report::{Report, ReportError};
///
/// let report = Report::new(vec![7, 6, 4, 2, 1]).unwrap();
/// assert_eq!(report.len(), 5);
/// assert_eq!(Report::new(vec![]), Err(ReportError::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Report {
    levels: Vec<Level>,
}

impl Report {
    /// Build a report, rejecting an empty level list
    pub fn new(levels: Vec<Level>) -> Result<Self, ReportError> {
        if levels.is_empty() {
            return Err(ReportError::Empty);
        }
        Ok(Self { levels })
    }

    /// Levels in report order
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Reports are never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// New report with the level at `index` dropped
    ///
    /// Remaining levels keep their relative order. Fails when `index` is out
    /// of range or when the result would be empty.
    pub fn without(&self, index: usize) -> Result<Report, ReportError> {
        if index >= self.levels.len() {
            return Err(ReportError::IndexOutOfRange {
                index,
                len: self.levels.len(),
            });
        }

        let levels: Vec<Level> = self
            .levels
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &level)| level)
            .collect();

        Report::new(levels)
    }
}

impl TryFrom<Vec<Level>> for Report {
    type Error = ReportError;

    fn try_from(levels: Vec<Level>) -> Result<Self, Self::Error> {
        Report::new(levels)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for level in &self.levels {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", level)?;
            first = false;
        }
        Ok(())
    }
}
