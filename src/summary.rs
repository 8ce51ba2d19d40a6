//! Run summary: per-report verdicts plus per-mode tallies
//!
//! Built once per invocation and handed to the text, JSON or CSV renderer.

use crate::config::{ClassifierConfig, ReportMode};
use crate::counter::{Mode, ReportCounter, Tally};
use crate::parser::ParsedReport;
use crate::report::Report;
use crate::safety::{SafetyClassifier, StepBounds, Verdict};
use serde::Serialize;

/// Verdicts for one input report
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    /// 1-based input line
    pub line: usize,
    pub levels: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerant: Option<Verdict>,
}

/// Everything a renderer needs for one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: ReportMode,
    pub step: StepBounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<Tally>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerant: Option<Tally>,
    pub reports: Vec<ReportOutcome>,
}

impl RunSummary {
    /// Evaluate every report in each mode the configuration asks for
    pub fn build(parsed: &[ParsedReport], config: &ClassifierConfig) -> Self {
        let classifier = SafetyClassifier::new(config.step);
        let reports: Vec<Report> = parsed.iter().map(|p| p.report.clone()).collect();

        let mut outcomes: Vec<ReportOutcome> = parsed
            .iter()
            .map(|p| ReportOutcome {
                line: p.line,
                levels: p.report.clone(),
                strict: None,
                tolerant: None,
            })
            .collect();

        let mut summary = RunSummary {
            mode: config.mode,
            step: config.step,
            strict: None,
            tolerant: None,
            reports: Vec::new(),
        };

        for &mode in config.mode.modes() {
            let counter = ReportCounter::new(classifier, mode).with_jobs(config.jobs);
            let verdicts = counter.verdicts(&reports);
            let tally = Tally::from_verdicts(&verdicts);

            for (outcome, verdict) in outcomes.iter_mut().zip(verdicts) {
                match mode {
                    Mode::Strict => outcome.strict = Some(verdict),
                    Mode::Tolerant => outcome.tolerant = Some(verdict),
                }
            }

            match mode {
                Mode::Strict => summary.strict = Some(tally),
                Mode::Tolerant => summary.tolerant = Some(tally),
            }
        }

        summary.reports = outcomes;
        summary
    }

    /// Plain text output: one count line per mode
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(tally) = &self.strict {
            out.push_str(&format!("safe reports: {}\n", tally.safe));
        }
        if let Some(tally) = &self.tolerant {
            out.push_str(&format!("safe reports (tolerant): {}\n", tally.safe));
        }
        out
    }
}
