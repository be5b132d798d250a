use crate::conf::ConfigError;
use crate::conf::types::LogpipeConfig;
use std::net::SocketAddr;

pub fn validate_config(config: &LogpipeConfig) -> Result<(), ConfigError> {
    config
        .server
        .listen
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::invalid("server.listen", e.to_string()))?;

    if config.server.threads == Some(0) {
        return Err(ConfigError::invalid("server.threads", "must be at least 1"));
    }

    if !config.query.route.starts_with('/') {
        return Err(ConfigError::invalid("query.route", "must start with '/'"));
    }

    if config.query.max_body_bytes == 0 {
        return Err(ConfigError::invalid(
            "query.max_body_bytes",
            "must be greater than zero",
        ));
    }

    if !config.query.data_dir.is_dir() {
        return Err(ConfigError::invalid(
            "query.data_dir",
            format!("{} is not a directory", config.query.data_dir.display()),
        ));
    }

    Ok(())
}
