use crate::report::{Level, Report, ReportError};
use std::iter::{Chain, Copied};
use std::slice::Iter;

/// Borrowed view of a report with exactly one level skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    levels: &'a [Level],
    removed: usize,
}

impl<'a> Candidate<'a> {
    /// Index of the skipped level in the source report
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// The skipped level itself
    pub fn removed_level(&self) -> Level {
        self.levels[self.removed]
    }

    pub fn len(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining levels in their original relative order
    pub fn levels(&self) -> Copied<Chain<Iter<'a, Level>, Iter<'a, Level>>> {
        let (head, tail) = self.levels.split_at(self.removed);
        head.iter().chain(tail[1..].iter()).copied()
    }

    /// Materialize the candidate as an owned report
    pub fn to_report(&self) -> Result<Report, ReportError> {
        Report::new(self.levels().collect())
    }
}

/// Lazy enumeration of the single-removal candidates of a report
///
/// Yields candidate `0..n` in index order. The iterator holds no state beyond
/// its position, so cloning it restarts the enumeration from that point.
#[derive(Debug, Clone)]
pub struct Removals<'a> {
    levels: &'a [Level],
    next: usize,
}

impl<'a> Iterator for Removals<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Candidate<'a>> {
        if self.next >= self.levels.len() {
            return None;
        }
        let candidate = Candidate {
            levels: self.levels,
            removed: self.next,
        };
        self.next += 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.levels.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Removals<'_> {}

/// All `n` single-removal candidates of a report of length `n`
///
/// # Example
/// ```
/// use vigia::report::Report;
/// use vigia::safety::removals;
///
/// let report = Report::new(vec![1, 3, 2]).unwrap();
/// let candidates: Vec<Vec<i64>> = removals(&report).map(|c| c.levels().collect()).collect();
/// assert_eq!(candidates, vec![vec![3, 2], vec![1, 2], vec![1, 3]]);
/// ```
pub fn removals(report: &Report) -> Removals<'_> {
    Removals {
        levels: report.levels(),
        next: 0,
    }
}
