
use crate::pipeline::{Lines, PipelineError};

pub(super) fn access_log() -> Vec<&'static str> {
    vec!["GET /a 200\n", "GET /b 404\n", "POST /a 200\n"]
}

pub(super) fn lines<'a>(input: &[&str]) -> Lines<'a> {
    let owned: Vec<String> = input.iter().map(|s| s.to_string()).collect();
    Box::new(owned.into_iter().map(Ok))
}

pub(super) fn drain(lines: Lines<'_>) -> Result<Vec<String>, PipelineError> {
    lines.collect()
}
