use crate::conf::ConfigError;
use crate::conf::types::LogpipeConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/logpipe.hcl";

/// Reads, parses and validates a config file.
pub fn load_config(path: &Path) -> Result<LogpipeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut config = parse_config(&contents).map_err(|e| ConfigError::parse(path, e))?;

    if config.query.data_dir.is_relative() {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.query.data_dir = base.join(&config.query.data_dir);
    }

    validate_config(&config)?;

    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<LogpipeConfig, hcl::Error> {
    hcl::from_str(contents)
}
