//! Report counting across a parsed collection
//!
//! Each report is evaluated independently, so with more than one job the
//! collection is split into contiguous chunks and evaluated on scoped worker
//! threads. Chunk results are joined in input order, which keeps verdict
//! order and counts identical to the sequential run.

use crate::report::Report;
use crate::safety::{SafetyClassifier, Verdict};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether single-fault tolerance applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Safe outright only
    Strict,
    /// Safe outright, or after removing one level
    Tolerant,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Strict => f.write_str("strict"),
            Mode::Tolerant => f.write_str("tolerant"),
        }
    }
}

/// Breakdown of verdicts for one mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    /// Safe reports, including tolerated ones
    pub safe: usize,
    /// Safe only after a removal (always 0 in strict mode)
    pub tolerated: usize,
    pub unsafe_count: usize,
}

impl Tally {
    pub fn from_verdicts<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a Verdict>,
    {
        let mut tally = Tally::default();
        for verdict in verdicts {
            tally.total += 1;
            match verdict {
                Verdict::Safe => tally.safe += 1,
                Verdict::SafeWithTolerance { .. } => {
                    tally.safe += 1;
                    tally.tolerated += 1;
                }
                Verdict::Unsafe { .. } => tally.unsafe_count += 1,
            }
        }
        tally
    }
}

/// Applies the classifier to every report and counts safe ones
///
/// # Example
/// ```
/// use vigia::counter::{Mode, ReportCounter};
/// use vigia::parser::parse_reports;
/// use vigia::safety::SafetyClassifier;
///
/// let reports = parse_reports("7 6 4 2 1\n1 3 2 4 5\n").unwrap();
/// let strict = ReportCounter::new(SafetyClassifier::default(), Mode::Strict);
/// let tolerant = ReportCounter::new(SafetyClassifier::default(), Mode::Tolerant);
/// assert_eq!(strict.count(&reports), 1);
/// assert_eq!(tolerant.count(&reports), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReportCounter {
    classifier: SafetyClassifier,
    mode: Mode,
    jobs: usize,
}

impl ReportCounter {
    pub fn new(classifier: SafetyClassifier, mode: Mode) -> Self {
        Self {
            classifier,
            mode,
            jobs: 1,
        }
    }

    /// Number of worker threads (values below 1 are treated as 1)
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn verdict(&self, report: &Report) -> Verdict {
        match self.mode {
            Mode::Strict => self.classifier.evaluate_strict(report),
            Mode::Tolerant => self.classifier.evaluate(report),
        }
    }

    /// One verdict per report, in input order
    pub fn verdicts(&self, reports: &[Report]) -> Vec<Verdict> {
        if self.jobs <= 1 || reports.len() < 2 {
            return reports.iter().map(|r| self.verdict(r)).collect();
        }
        self.verdicts_parallel(reports)
    }

    fn verdicts_parallel(&self, reports: &[Report]) -> Vec<Verdict> {
        let chunk_size = reports.len().div_ceil(self.jobs);
        tracing::debug!(
            "evaluating {} reports on {} workers (chunk size {})",
            reports.len(),
            self.jobs,
            chunk_size
        );

        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = reports
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk.iter().map(|r| self.verdict(r)).collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        });

        match joined {
            Ok(Ok(chunks)) => chunks.into_iter().flatten().collect(),
            Ok(Err(panic)) | Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Count of reports judged safe in this counter's mode
    pub fn count(&self, reports: &[Report]) -> usize {
        self.tally(reports).safe
    }

    pub fn tally(&self, reports: &[Report]) -> Tally {
        let tally = Tally::from_verdicts(&self.verdicts(reports));
        tracing::info!(
            "{} mode: {} of {} reports safe ({} tolerated)",
            self.mode,
            tally.safe,
            tally.total,
            tally.tolerated
        );
        tally
    }
}
