use crate::conf::{ConfigError, DEFAULT_CONFIG_PATH, load_config};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
    }
}

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listening on {}", cfg.server.listen);
            println!("✔ route {}", cfg.query.route);
            println!("✔ data directory {}", cfg.query.data_dir.display());
            if cfg.server.tls.is_some() {
                println!("✔ TLS enabled");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(hint) = config_error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Invalid {
            field: "query.data_dir",
            ..
        } => Some(
            "The data directory must exist before the server starts.\n\
             Relative paths are resolved against the config file's directory.\n\
             \n\
             Example:\n\
             \n\
             query {\n  data_dir = \"data\"\n}",
        ),

        ConfigError::Invalid {
            field: "server.listen",
            ..
        } => Some(
            "The listen address must be an IP and port.\n\
             \n\
             Example:\n\
             \n\
             server {\n  listen = \"0.0.0.0:8080\"\n}",
        ),

        _ => None,
    }
}
