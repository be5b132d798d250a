use crate::pipeline::PipelineOutput;
use crate::query::{Query, execute_query};
use clap::Args;
use std::path::PathBuf;

/// Run a two-stage pipeline over a file without starting the server.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Directory the file name is resolved against
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Log file name, relative to the data directory
    pub file_name: String,

    pub command1: String,
    pub value1: String,
    pub command2: String,
    pub value2: String,
}

pub fn run(args: QueryArgs) -> anyhow::Result<()> {
    let query = Query {
        file_name: args.file_name,
        command1: args.command1,
        value1: args.value1,
        command2: args.command2,
        value2: args.value2,
    };

    match execute_query(&args.data_dir, &query) {
        Ok(output) => {
            print!("{}", render_output(&output));
            tracing::debug!(lines = output.line_count, "query completed");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}: {err}", err.code());
            std::process::exit(1);
        }
    }
}

/// Body as-is, plus a newline when it does not already end with one.
pub fn render_output(output: &PipelineOutput) -> String {
    if output.is_empty() {
        return String::new();
    }

    let mut text = output.body.clone();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
