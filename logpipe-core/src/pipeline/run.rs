use crate::pipeline::operators::{Lines, Operator};
use crate::pipeline::{PipelineError, PipelineOutput, Stage};
use tracing::debug;

/// One `(command, value)` pair as received from the caller.
#[derive(Debug, Clone, Copy)]
pub struct StageSpec<'q> {
    pub command: &'q str,
    pub value: &'q str,
}

impl<'q> StageSpec<'q> {
    pub fn new(command: &'q str, value: &'q str) -> Self {
        Self { command, value }
    }
}

/// Runs the fixed two-stage pipeline over `lines` and joins the result with
/// newlines.
pub fn run_pipeline<'a, I>(
    lines: I,
    first: StageSpec<'_>,
    second: StageSpec<'_>,
) -> Result<PipelineOutput, PipelineError>
where
    I: Iterator<Item = Result<String, PipelineError>> + 'a,
{
    // Both stages are parsed before any line is read.
    let first_op = Operator::parse(Stage::First, first.command, first.value)?;
    let second_op = Operator::parse(Stage::Second, second.command, second.value)?;

    let lines: Lines<'a> = Box::new(lines);

    let lines = first_op.apply(lines, Stage::First)?;
    debug!(stage = %Stage::First, command = first.command, "stage prepared");

    let lines = second_op.apply(lines, Stage::Second)?;
    debug!(stage = %Stage::Second, command = second.command, "stage prepared");

    join_lines(lines)
}

fn join_lines(lines: Lines<'_>) -> Result<PipelineOutput, PipelineError> {
    let mut body = String::new();
    let mut line_count = 0;

    for line in lines {
        let line = line?;
        if line_count > 0 {
            body.push('\n');
        }
        body.push_str(&line);
        line_count += 1;
    }

    Ok(PipelineOutput { body, line_count })
}
