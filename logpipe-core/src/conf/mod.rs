mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_PATH, load_config, parse_config};
pub use types::LogpipeConfig;
pub use validate::validate_config;
