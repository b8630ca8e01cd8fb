use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ip::Strategy;

/// Default number of progress lines per run (every 5%)
pub const DEFAULT_PROGRESS_STEPS: usize = 20;
/// Default output buffer size (1 MiB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;
/// Default number of leading addresses shown in the summary
pub const DEFAULT_SAMPLE_HEAD: usize = 10;
/// Default number of trailing addresses shown in the summary
pub const DEFAULT_SAMPLE_TAIL: usize = 5;

/// Generator settings, loadable from YAML and overridable from the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generation policy
    pub strategy: Strategy,
    /// Reject duplicate addresses within a run
    pub unique: bool,
    /// Directory the output file is created in
    pub output_dir: PathBuf,
    /// Fixed seed for reproducible output; a time-derived seed is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of progress reports over the run
    pub progress_steps: usize,
    /// Output writer buffer size in bytes
    pub buffer_size: usize,
    pub sample_head: usize,
    pub sample_tail: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            unique: false,
            output_dir: PathBuf::from("."),
            seed: None,
            progress_steps: DEFAULT_PROGRESS_STEPS,
            buffer_size: DEFAULT_BUFFER_SIZE,
            sample_head: DEFAULT_SAMPLE_HEAD,
            sample_tail: DEFAULT_SAMPLE_TAIL,
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.progress_steps == 0 {
            return Err(ValidationError::InvalidProgress(
                "progress_steps must be at least 1".to_string(),
            ));
        }

        if self.buffer_size == 0 {
            return Err(ValidationError::InvalidOutput(
                "buffer_size must be at least 1 byte".to_string(),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidOutput(
                "output_dir cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Output file name prefix, e.g. `unique_ultra_fast`
    pub fn file_prefix(&self) -> String {
        if self.unique {
            format!("unique_{}", self.strategy.file_prefix())
        } else {
            self.strategy.file_prefix().to_string()
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid progress configuration: {0}")]
    InvalidProgress(String),
    #[error("Invalid output configuration: {0}")]
    InvalidOutput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let yaml = r#"
strategy: flat
unique: true
output_dir: "out"
seed: 1234
progress_steps: 4
"#;

        let config: GeneratorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.strategy, Strategy::FlatEnumeration);
        assert!(config.unique);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.progress_steps, 4);
        // Unspecified fields keep their defaults
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.sample_head, DEFAULT_SAMPLE_HEAD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GeneratorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.strategy, Strategy::RejectResample);
        assert!(!config.unique);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<GeneratorConfig, _> = serde_yaml::from_str("stratgy: flat\n");
        assert!(result.is_err());

        let result: Result<GeneratorConfig, _> = serde_yaml::from_str("strategy: turbo\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        config.progress_steps = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidProgress(_))));

        config.progress_steps = 10;
        config.buffer_size = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidOutput(_))));

        config.buffer_size = 4096;
        config.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_prefix() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.file_prefix(), "generated");

        config.strategy = Strategy::DirectRange;
        assert_eq!(config.file_prefix(), "fast_generated");

        config.strategy = Strategy::FlatEnumeration;
        config.unique = true;
        assert_eq!(config.file_prefix(), "unique_ultra_fast");
    }
}
