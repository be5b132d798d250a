use clap::{Parser, Subcommand};
use logpipe_core::cli;
use logpipe_core::conf::{DEFAULT_CONFIG_PATH, load_config};
use logpipe_core::logging::init_logging;
use logpipe_core::server;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "logpipe",
    version,
    about = "logpipe: query log files over HTTP with two-stage pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },

    /// Run a pipeline over a local file and print the result
    Query(cli::query::QueryArgs),

    /// Run the logpipe server (default)
    Run {
        /// Path to the logpipe config file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        Some(Command::Query(args)) => cli::query::run(args),
        Some(Command::Run { config }) => run_server(&config),
        None => run_server(Path::new(DEFAULT_CONFIG_PATH)),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "logpipe exited with an error");
        eprintln!("logpipe error: {e:#}");
        std::process::exit(1);
    }
}

fn run_server(path: &Path) -> anyhow::Result<()> {
    let cfg = load_config(path)?;
    server::run(cfg)
}
