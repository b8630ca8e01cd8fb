use crate::config::GeneratorConfig;
use crate::ip::Strategy;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Load and parse generator configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<GeneratorConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: GeneratorConfig = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    config.validate()?;

    Ok(config)
}

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub strategy: Option<Strategy>,
    pub unique: bool,
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Apply command-line overrides to a loaded configuration
pub fn apply_overrides(config: &mut GeneratorConfig, overrides: &CliOverrides) -> Result<()> {
    if let Some(strategy) = overrides.strategy {
        config.strategy = strategy;
    }

    // The positional mode can only switch unique mode on
    if overrides.unique {
        config.unique = true;
    }

    if let Some(dir) = &overrides.output_dir {
        config.output_dir = dir.clone();
    }

    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}
