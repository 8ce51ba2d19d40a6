use crate::report::{Delta, Level, Report, ReportError};

/// Lazy iterator over consecutive differences of a level sequence
///
/// Yields `next - prev` for each adjacent pair, in order. Deltas are computed
/// in `i128`, so even `i64::MAX - i64::MIN` is exact.
#[derive(Debug, Clone)]
pub struct Deltas<I> {
    levels: I,
    prev: Option<Level>,
}

impl<I: Iterator<Item = Level>> Iterator for Deltas<I> {
    type Item = Delta;

    fn next(&mut self) -> Option<Delta> {
        let prev = match self.prev {
            Some(prev) => prev,
            None => self.levels.next()?,
        };
        let next = self.levels.next()?;
        self.prev = Some(next);
        Some(Delta::from(next) - Delta::from(prev))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.levels.size_hint();
        // Before the first pull one level is consumed without producing a delta
        if self.prev.is_some() {
            (lo, hi)
        } else {
            (lo.saturating_sub(1), hi.map(|h| h.saturating_sub(1)))
        }
    }
}

/// Adapt any level iterator into its delta sequence
///
/// # Example
/// ```
/// use vigia::safety::deltas;
///
/// let d: Vec<i128> = deltas([1, 3, 6, 7, 9]).collect();
/// assert_eq!(d, vec![2, 3, 1, 2]);
/// ```
pub fn deltas<I>(levels: I) -> Deltas<I::IntoIter>
where
    I: IntoIterator<Item = Level>,
{
    Deltas {
        levels: levels.into_iter(),
        prev: None,
    }
}

/// Materialized delta sequence of a report (n levels -> n-1 deltas)
pub fn delta_sequence(report: &Report) -> Vec<Delta> {
    deltas(report.levels().iter().copied()).collect()
}

/// Delta sequence of a raw level slice
///
/// An empty slice has no levels to reason about and is rejected.
pub fn try_delta_sequence(levels: &[Level]) -> Result<Vec<Delta>, ReportError> {
    if levels.is_empty() {
        return Err(ReportError::Empty);
    }
    Ok(deltas(levels.iter().copied()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sequence_basic() {
        let report = Report::new(vec![7, 6, 4, 2, 1]).unwrap();
        assert_eq!(delta_sequence(&report), vec![-1, -2, -2, -1]);
    }

    #[test]
    fn test_single_level_has_no_deltas() {
        let report = Report::new(vec![5]).unwrap();
        assert!(delta_sequence(&report).is_empty());
    }

    #[test]
    fn test_try_delta_sequence_rejects_empty() {
        assert_eq!(try_delta_sequence(&[]), Err(ReportError::Empty));
        assert_eq!(try_delta_sequence(&[4, 4]), Ok(vec![0]));
    }

    #[test]
    fn test_extreme_levels_exact() {
        let d: Vec<Delta> = deltas([i64::MIN, i64::MAX, i64::MIN]).collect();
        let span = (1i128 << 64) - 1;
        assert_eq!(d, vec![span, -span]);
    }

    #[test]
    fn test_size_hint_exact() {
        let it = deltas(vec![1, 2, 3, 4]);
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(deltas(Vec::<Level>::new()).size_hint(), (0, Some(0)));
    }
}
