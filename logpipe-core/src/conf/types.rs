use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents the top-level configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogpipeConfig {
    pub server: ServerConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:8080"
    pub listen: String,

    /// Optional number of worker threads - default is decided by Pingora.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    pub cert: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_route")]
    pub route: String,

    /// Directory log files are served from. Relative paths are resolved
    /// against the directory containing the config file.
    pub data_dir: PathBuf,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_route() -> String {
    "/perform_query".to_string()
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}
