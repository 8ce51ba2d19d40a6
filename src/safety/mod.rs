// Report Safety Classification
//
// A report is safe when its levels move in one direction only and every step
// between adjacent levels stays inside a bounded band (1..=3 by default).
// A report that fails can still pass under single-fault tolerance when
// dropping exactly one level makes the remainder safe.
//
// Pipeline (each stage only calls the one below it):
//   evaluate -> removals -> classifier -> trend/step -> deltas
//
// The removal search is brute force: n candidates per report, each checked in
// one O(n) pass, O(n^2) overall. Reports are short, so this is fine.

mod classifier;
mod delta;
mod removal;
mod step;
mod tolerance;
mod trend;

pub use classifier::{is_safe, SafetyClassifier, Violation};
pub use delta::{delta_sequence, deltas, try_delta_sequence, Deltas};
pub use removal::{removals, Candidate, Removals};
pub use step::{is_valid_step, StepBounds};
pub use tolerance::{is_fault_tolerant_safe, Verdict};
pub use trend::{follows_trend, Trend, TrendBreak};
