//! JSON output format for classification runs
//!
//! `--format json` implementation

use crate::summary::RunSummary;
use serde::Serialize;

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Format version identifier
    pub version: &'static str,
    /// Format name
    pub format: &'static str,
    /// Counts, per-report verdicts and the settings that produced them
    #[serde(flatten)]
    pub summary: &'a RunSummary,
}

impl<'a> JsonOutput<'a> {
    pub fn new(summary: &'a RunSummary) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            format: "vigia-json-v1",
            summary,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
