//! Classifier configuration
//!
//! Loaded from TOML, then overridden field by field from the command line.
//!
//! ```toml
//! mode = "both"
//! jobs = 4
//!
//! [step]
//! min = 1
//! max = 3
//! ```

use crate::counter::Mode;
use crate::safety::StepBounds;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid step bounds: min={min}, max={max} (need 1 <= min <= max)")]
    InvalidStepBounds { min: u64, max: u64 },

    #[error("Invalid job count: {0} (must be >= 1)")]
    InvalidJobs(usize),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which counts to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Safe outright only
    Strict,
    /// Allow one level to be removed
    Tolerant,
    /// Both counts
    #[default]
    Both,
}

impl ReportMode {
    pub fn modes(self) -> &'static [Mode] {
        match self {
            ReportMode::Strict => &[Mode::Strict],
            ReportMode::Tolerant => &[Mode::Tolerant],
            ReportMode::Both => &[Mode::Strict, Mode::Tolerant],
        }
    }
}

/// Configuration for a classification run
///
/// # Example
/// ```
/// use vigia::config::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert_eq!(config.step.min, 1);
/// assert_eq!(config.step.max, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Allowed |delta| band
    pub step: StepBounds,

    /// Strict, tolerant or both counts
    pub mode: ReportMode,

    /// Worker threads for report evaluation
    pub jobs: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            step: StepBounds::default(),
            mode: ReportMode::Both,
            jobs: 1,
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds that admit a zero step or are inverted, and zero jobs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step.min == 0 || self.step.min > self.step.max {
            return Err(ConfigError::InvalidStepBounds {
                min: self.step.min,
                max: self.step.max,
            });
        }
        if self.jobs == 0 {
            return Err(ConfigError::InvalidJobs(self.jobs));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            mode = "tolerant"
            jobs = 4

            [step]
            min = 2
            max = 5
        "#;

        let config = ClassifierConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.mode, ReportMode::Tolerant);
        assert_eq!(config.jobs, 4);
        assert_eq!(config.step, StepBounds::new(2, 5));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ClassifierConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClassifierConfig::default());
    }

    #[test]
    fn test_zero_min_step_rejected() {
        let toml = r#"
            [step]
            min = 0
            max = 3
        "#;
        let err = ClassifierConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidStepBounds { min: 0, max: 3 }
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = ClassifierConfig {
            step: StepBounds::new(4, 2),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let err = ClassifierConfig::from_toml_str("jobs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJobs(0)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ClassifierConfig::from_toml_str("tolerance = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_band_wider_than_i64_classifies_exactly() {
        let toml = r#"
            [step]
            min = 1
            max = 9223372036854775808
        "#;
        let config = ClassifierConfig::from_toml_str(toml).unwrap();
        let classifier = crate::safety::SafetyClassifier::new(config.step);

        // Real gap is 2^64 - 1, beyond max = 2^63
        assert!(!classifier.is_safe([i64::MIN, i64::MAX]));
        // Gaps of exactly 2^63 sit on the edge, one more falls outside
        assert!(classifier.is_safe([i64::MIN, 0]));
        assert!(classifier.is_safe([-1, i64::MAX]));
        assert!(!classifier.is_safe([-2, i64::MAX]));
    }

    #[test]
    fn test_report_mode_expansion() {
        assert_eq!(ReportMode::Both.modes(), &[Mode::Strict, Mode::Tolerant]);
        assert_eq!(ReportMode::Strict.modes(), &[Mode::Strict]);
    }
}
