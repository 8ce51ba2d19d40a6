use crate::report::Delta;
use serde::Serialize;
use std::fmt;

/// Shared direction of a report's deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

impl Trend {
    /// Direction of a single delta; zero has none
    pub fn of(delta: Delta) -> Option<Trend> {
        match delta {
            d if d > 0 => Some(Trend::Increasing),
            d if d < 0 => Some(Trend::Decreasing),
            _ => None,
        }
    }

    /// Check the next delta against the trend fixed so far
    ///
    /// `current` is `None` before the first delta; the first delta then sets
    /// the trend. Returns the trend to carry forward.
    pub fn advance(current: Option<Trend>, delta: Delta) -> Result<Trend, TrendBreak> {
        let direction = Trend::of(delta).ok_or(TrendBreak::Stall)?;
        match current {
            Some(expected) if expected != direction => Err(TrendBreak::Reversal { expected }),
            _ => Ok(direction),
        }
    }
}

/// Why a delta does not continue the trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendBreak {
    /// Zero delta: no direction at all
    Stall,
    /// Direction opposite to `expected`
    Reversal { expected: Trend },
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => f.write_str("increasing"),
            Trend::Decreasing => f.write_str("decreasing"),
        }
    }
}

/// True iff every delta has the same strict sign as the first
///
/// An empty sequence (single-level report) is vacuously trending. A zero
/// delta anywhere fails, including in first position.
pub fn follows_trend(deltas: &[Delta]) -> bool {
    let mut current = None;
    for &delta in deltas {
        match Trend::advance(current, delta) {
            Ok(trend) => current = Some(trend),
            Err(_) => return false,
        }
    }
    true
}
