use crate::report::Delta;
use serde::{Deserialize, Serialize};

/// Allowed magnitude band for a single step between adjacent levels
///
/// The default band is `1..=3`: a zero step is never allowed.
///
/// # Example
/// ```
/// use vigia::safety::StepBounds;
///
/// let bounds = StepBounds::default();
/// assert!(bounds.contains(-3));
/// assert!(!bounds.contains(0));
/// assert!(!bounds.contains(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepBounds {
    /// Smallest allowed |delta|
    pub min: u64,
    /// Largest allowed |delta|
    pub max: u64,
}

impl Default for StepBounds {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

impl StepBounds {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// True iff `min <= |delta| <= max`
    pub fn contains(&self, delta: Delta) -> bool {
        let magnitude = delta.unsigned_abs();
        magnitude >= u128::from(self.min) && magnitude <= u128::from(self.max)
    }
}

/// Step check against the default `1..=3` band
pub fn is_valid_step(delta: Delta) -> bool {
    StepBounds::default().contains(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band() {
        for delta in [1, 2, 3, -1, -2, -3] {
            assert!(is_valid_step(delta), "delta {} should be valid", delta);
        }
        for delta in [0, 4, -4, 100] {
            assert!(!is_valid_step(delta), "delta {} should be invalid", delta);
        }
    }

    #[test]
    fn test_extreme_deltas_do_not_overflow() {
        assert!(!is_valid_step(Delta::MIN));
        assert!(!is_valid_step(Delta::MAX));
        assert!(!is_valid_step(Delta::from(i64::MIN)));
    }

    #[test]
    fn test_band_edges_above_i64_range() {
        let span = (1i128 << 64) - 1; // i64::MAX - i64::MIN
        let half = 1u64 << 63;

        // max = 2^63 must still reject a 2^64 - 1 step
        assert!(!StepBounds::new(1, half).contains(span));
        assert!(!StepBounds::new(1, half).contains(-span));
        assert!(StepBounds::new(1, half).contains(Delta::from(half)));

        // min above i64::MAX must accept a step that really is that large
        assert!(StepBounds::new(half, u64::MAX).contains(span));
        assert!(!StepBounds::new(half, u64::MAX).contains(Delta::from(half) - 1));
    }

    #[test]
    fn test_custom_band() {
        let bounds = StepBounds::new(2, 5);
        assert!(!bounds.contains(1));
        assert!(bounds.contains(-5));
        assert!(!bounds.contains(6));
    }
}
