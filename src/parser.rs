//! Report parsing from raw text
//!
//! One report per line, levels separated by whitespace:
//!
//! ```text
//! 7 6 4 2 1
//! 1 2 7 8 9
//! ```
//!
//! Blank lines are skipped. Any token that is not an integer aborts the parse
//! with the offending line number.

use crate::report::{Level, Report};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while turning text into reports
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: invalid level '{token}'")]
    InvalidLevel { line: usize, token: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A parsed report plus the 1-based input line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub line: usize,
    pub report: Report,
}

/// Parse a single line into its levels
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Report>, ParseError> {
    let levels = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Level>()
                .map_err(|_| ParseError::InvalidLevel {
                    line: line_number,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Non-empty by construction once blank lines are filtered
    Ok(Report::new(levels).ok())
}

/// Parse every non-blank line, keeping source line numbers
pub fn parse_numbered(text: &str) -> Result<Vec<ParsedReport>, ParseError> {
    let mut reports = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        match parse_line(line_number, line)? {
            Some(report) => reports.push(ParsedReport {
                line: line_number,
                report,
            }),
            None => tracing::trace!("skipping blank line {}", line_number),
        }
    }

    tracing::debug!("parsed {} reports", reports.len());
    Ok(reports)
}

/// Parse text into reports, dropping line numbers
///
/// # Example
/// ```
/// use vigia::parser::parse_reports;
///
/// let reports = parse_reports("7 6 4 2 1\n\n1 3 6 7 9\n").unwrap();
/// assert_eq!(reports.len(), 2);
/// assert_eq!(reports[1].levels(), &[1, 3, 6, 7, 9]);
///
/// assert!(parse_reports("1 2 x").is_err());
/// ```
pub fn parse_reports(text: &str) -> Result<Vec<Report>, ParseError> {
    Ok(parse_numbered(text)?
        .into_iter()
        .map(|parsed| parsed.report)
        .collect())
}

/// File-backed report source
#[derive(Debug, Clone)]
pub struct ReportParser {
    path: PathBuf,
}

impl ReportParser {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the whole file
    pub fn parse(&self) -> Result<Vec<ParsedReport>, ParseError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ParseError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_numbered(&text)
    }

    /// Shorthand for `ReportParser::new(path).parse()`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ParsedReport>, ParseError> {
        Self::new(path).parse()
    }
}
