use crate::report::Report;
use crate::safety::classifier::{SafetyClassifier, Violation};
use crate::safety::removal::removals;
use serde::Serialize;

/// Outcome of evaluating one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Safe as-is
    Safe,

    /// Safe only once the level at `removed` is dropped
    SafeWithTolerance { removed: usize },

    /// Unsafe; `violation` is the first problem in the unmodified report
    Unsafe { violation: Violation },
}

impl Verdict {
    /// True for `Safe` and `SafeWithTolerance`
    pub fn is_safe(&self) -> bool {
        !matches!(self, Verdict::Unsafe { .. })
    }

    /// True only when no removal was needed
    pub fn is_strictly_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }

    pub fn removed(&self) -> Option<usize> {
        match self {
            Verdict::SafeWithTolerance { removed } => Some(*removed),
            _ => None,
        }
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Unsafe { violation } => Some(violation),
            _ => None,
        }
    }
}

impl SafetyClassifier {
    /// Verdict without fault tolerance
    pub fn evaluate_strict(&self, report: &Report) -> Verdict {
        match self.diagnose(report.levels().iter().copied()) {
            None => Verdict::Safe,
            Some(violation) => Verdict::Unsafe { violation },
        }
    }

    /// Verdict under single-fault tolerance
    ///
    /// Safe outright wins. Otherwise candidates are tried in removal-index
    /// order and the first safe one is reported; the search stops there.
    ///
    /// # Example
    /// ```
    /// use vigia::report::Report;
    /// use vigia::safety::{SafetyClassifier, Verdict};
    ///
    /// let report = Report::new(vec![1, 3, 2, 4, 5]).unwrap();
    /// let verdict = SafetyClassifier::default().evaluate(&report);
    /// assert_eq!(verdict, Verdict::SafeWithTolerance { removed: 1 });
    /// ```
    pub fn evaluate(&self, report: &Report) -> Verdict {
        let violation = match self.evaluate_strict(report) {
            Verdict::Unsafe { violation } => violation,
            verdict => return verdict,
        };

        tracing::debug!("report [{}] unsafe: {}", report, violation);

        let tolerated = removals(report).find(|candidate| {
            let safe = self.is_safe(candidate.levels());
            tracing::trace!(
                "candidate without index {} (level {}): safe={}",
                candidate.removed(),
                candidate.removed_level(),
                safe
            );
            safe
        });

        match tolerated {
            Some(candidate) => {
                tracing::debug!(
                    "report [{}] tolerated by removing index {}",
                    report,
                    candidate.removed()
                );
                Verdict::SafeWithTolerance {
                    removed: candidate.removed(),
                }
            }
            None => Verdict::Unsafe { violation },
        }
    }
}

/// Single-fault tolerant safety check with the default step band
pub fn is_fault_tolerant_safe(report: &Report) -> bool {
    SafetyClassifier::default().evaluate(report).is_safe()
}
