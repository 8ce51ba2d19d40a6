//! CSV output format for classification runs
//!
//! One row per report for spreadsheet analysis and machine parsing.

use crate::safety::Verdict;
use crate::summary::{ReportOutcome, RunSummary};

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    summary: &'a RunSummary,
}

impl<'a> CsvOutput<'a> {
    pub fn new(summary: &'a RunSummary) -> Self {
        Self { summary }
    }

    fn header(&self) -> &'static str {
        "line,levels,strict,tolerant,removed,violation"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn verdict_field(verdict: Option<&Verdict>) -> &'static str {
        match verdict {
            None => "",
            Some(v) if v.is_safe() => "safe",
            Some(_) => "unsafe",
        }
    }

    fn format_outcome(&self, outcome: &ReportOutcome) -> String {
        let removed = outcome
            .tolerant
            .as_ref()
            .and_then(Verdict::removed)
            .map(|i| i.to_string())
            .unwrap_or_default();

        // Either mode reports the same first violation for an unsafe report
        let violation = outcome
            .strict
            .as_ref()
            .or(outcome.tolerant.as_ref())
            .and_then(Verdict::violation)
            .map(|v| v.to_string())
            .unwrap_or_default();

        [
            outcome.line.to_string(),
            Self::escape_field(&outcome.levels.to_string()),
            Self::verdict_field(outcome.strict.as_ref()).to_string(),
            Self::verdict_field(outcome.tolerant.as_ref()).to_string(),
            removed,
            Self::escape_field(&violation),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(self.header());
        output.push('\n');

        for outcome in &self.summary.reports {
            output.push_str(&self.format_outcome(outcome));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassifierConfig, ReportMode};
    use crate::parser::parse_numbered;

    fn csv(text: &str, mode: ReportMode) -> String {
        let parsed = parse_numbered(text).unwrap();
        let config = ClassifierConfig {
            mode,
            ..Default::default()
        };
        let summary = RunSummary::build(&parsed, &config);
        CsvOutput::new(&summary).to_csv()
    }

    #[test]
    fn test_csv_header() {
        let output = csv("", ReportMode::Both);
        assert_eq!(output, "line,levels,strict,tolerant,removed,violation\n");
    }

    #[test]
    fn test_csv_rows() {
        let output = csv("7 6 4 2 1\n1 3 2 4 5\n\n1 2 7 8 9\n", ReportMode::Both);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "1,7 6 4 2 1,safe,safe,,");
        assert_eq!(
            lines[2],
            "2,1 3 2 4 5,unsafe,safe,1,delta 1 (-1) breaks increasing trend"
        );
        assert_eq!(
            lines[3],
            "4,1 2 7 8 9,unsafe,unsafe,,delta 1 (+5) outside step bounds"
        );
    }

    #[test]
    fn test_csv_strict_only_leaves_tolerant_blank() {
        let output = csv("1 3 2 4 5\n", ReportMode::Strict);
        assert_eq!(
            output.lines().nth(1),
            Some("1,1 3 2 4 5,unsafe,,,delta 1 (-1) breaks increasing trend")
        );
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(CsvOutput::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvOutput::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(CsvOutput::escape_field("plain"), "plain");
    }
}
