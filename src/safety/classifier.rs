use crate::report::{Delta, Level, Report};
use crate::safety::delta::deltas;
use crate::safety::step::StepBounds;
use crate::safety::trend::{Trend, TrendBreak};
use serde::Serialize;
use std::fmt;

/// First reason a level sequence is unsafe
///
/// `index` is the delta position: the gap between levels `index` and
/// `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Adjacent levels are equal, so the sequence has no direction there
    Stall { index: usize },

    /// Direction flipped relative to the first delta
    TrendReversal {
        index: usize,
        expected: Trend,
        delta: Delta,
    },

    /// Step magnitude outside the allowed band
    StepOutOfBounds { index: usize, delta: Delta },
}

impl Violation {
    pub fn index(&self) -> usize {
        match *self {
            Violation::Stall { index }
            | Violation::TrendReversal { index, .. }
            | Violation::StepOutOfBounds { index, .. } => index,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Stall { index } => write!(f, "no change at delta {}", index),
            Violation::TrendReversal {
                index,
                expected,
                delta,
            } => write!(
                f,
                "delta {} ({:+}) breaks {} trend",
                index, delta, expected
            ),
            Violation::StepOutOfBounds { index, delta } => {
                write!(f, "delta {} ({:+}) outside step bounds", index, delta)
            }
        }
    }
}

/// Safe/unsafe classifier for level sequences
///
/// A sequence is safe iff every delta lies in the step band and all deltas
/// share the sign of the first one. Checks run in a single pass and stop at
/// the first violation.
///
/// # Example
/// ```
/// use vigia::report::Report;
/// use vigia::safety::SafetyClassifier;
///
/// let classifier = SafetyClassifier::default();
/// assert!(classifier.is_safe([7, 6, 4, 2, 1]));
/// assert!(!classifier.is_safe([1, 2, 7, 8, 9]));
///
/// let report = Report::new(vec![1, 3, 6, 7, 9]).unwrap();
/// assert!(classifier.is_report_safe(&report));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafetyClassifier {
    bounds: StepBounds,
}

impl SafetyClassifier {
    pub fn new(bounds: StepBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> StepBounds {
        self.bounds
    }

    /// First violation in delta order, or `None` when the sequence is safe
    ///
    /// At each position the direction is checked before the step band.
    pub fn diagnose<I>(&self, levels: I) -> Option<Violation>
    where
        I: IntoIterator<Item = Level>,
    {
        let mut trend: Option<Trend> = None;

        for (index, delta) in deltas(levels).enumerate() {
            match Trend::advance(trend, delta) {
                Ok(direction) => trend = Some(direction),
                Err(TrendBreak::Stall) => return Some(Violation::Stall { index }),
                Err(TrendBreak::Reversal { expected }) => {
                    return Some(Violation::TrendReversal {
                        index,
                        expected,
                        delta,
                    })
                }
            }

            if !self.bounds.contains(delta) {
                return Some(Violation::StepOutOfBounds { index, delta });
            }
        }

        None
    }

    pub fn is_safe<I>(&self, levels: I) -> bool
    where
        I: IntoIterator<Item = Level>,
    {
        self.diagnose(levels).is_none()
    }

    pub fn is_report_safe(&self, report: &Report) -> bool {
        self.is_safe(report.levels().iter().copied())
    }
}

/// Safety check with the default `1..=3` step band
pub fn is_safe(report: &Report) -> bool {
    SafetyClassifier::default().is_report_safe(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnose_step_out_of_bounds() {
        let classifier = SafetyClassifier::default();
        assert_eq!(
            classifier.diagnose([1, 2, 7, 8, 9]),
            Some(Violation::StepOutOfBounds { index: 1, delta: 5 })
        );
        assert_eq!(
            classifier.diagnose([9, 7, 6, 2, 1]),
            Some(Violation::StepOutOfBounds {
                index: 2,
                delta: -4
            })
        );
    }

    #[test]
    fn test_diagnose_reversal() {
        let classifier = SafetyClassifier::default();
        assert_eq!(
            classifier.diagnose([1, 3, 2, 4, 5]),
            Some(Violation::TrendReversal {
                index: 1,
                expected: Trend::Increasing,
                delta: -1
            })
        );
    }

    #[test]
    fn test_diagnose_stall() {
        let classifier = SafetyClassifier::default();
        assert_eq!(
            classifier.diagnose([8, 6, 4, 4, 1]),
            Some(Violation::Stall { index: 2 })
        );
        // Zero first delta: no trend can be inferred
        assert_eq!(classifier.diagnose([3, 3, 4]), Some(Violation::Stall { index: 0 }));
    }

    #[test]
    fn test_single_level_is_safe() {
        assert!(SafetyClassifier::default().is_safe([42]));
    }

    #[test]
    fn test_custom_bounds() {
        let classifier = SafetyClassifier::new(StepBounds::new(1, 5));
        assert!(classifier.is_safe([1, 2, 7, 8, 9]));
    }

    #[test]
    fn test_extreme_levels_under_wide_band() {
        // |i64::MAX - i64::MIN| = 2^64 - 1, above a 2^63 band edge
        let classifier = SafetyClassifier::new(StepBounds::new(1, 1u64 << 63));
        assert!(!classifier.is_safe([i64::MIN, i64::MAX]));
        assert_eq!(
            classifier.diagnose([i64::MIN, i64::MAX]),
            Some(Violation::StepOutOfBounds {
                index: 0,
                delta: (1i128 << 64) - 1
            })
        );

        // A full-range band admits it
        let classifier = SafetyClassifier::new(StepBounds::new(1, u64::MAX));
        assert!(classifier.is_safe([i64::MIN, i64::MAX]));
        assert!(classifier.is_safe([i64::MAX, 0, i64::MIN]));
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::StepOutOfBounds { index: 1, delta: 5 };
        assert_eq!(v.to_string(), "delta 1 (+5) outside step bounds");
        assert_eq!(v.index(), 1);
    }
}
