use crate::pipeline::{Command, PipelineError, SortOrder, Stage};
use ahash::AHashSet;
use regex::Regex;

/// A forward-only stream of lines threaded through the pipeline.
///
/// Errors travel inside the stream so a lazy stage can fail on the exact line
/// that broke it; consumers stop at the first `Err`.
pub type Lines<'a> = Box<dyn Iterator<Item = Result<String, PipelineError>> + 'a>;

/// A command with its argument already parsed.
#[derive(Debug)]
pub enum Operator {
    Filter(String),
    Map(usize),
    Unique,
    Sort(SortOrder),
    Limit(usize),
    Regex(Regex),
}

impl Operator {
    /// Parses `command` and its argument without touching any line, so a
    /// malformed stage is reported before earlier stages read the file.
    pub fn parse(stage: Stage, command: &str, value: &str) -> Result<Self, PipelineError> {
        let command = command
            .parse::<Command>()
            .map_err(|_| PipelineError::UnknownCommand {
                stage,
                command: command.to_owned(),
            })?;

        let op = match command {
            Command::Filter => Operator::Filter(value.to_owned()),
            Command::Map => Operator::Map(parse_number(stage, command, value)?),
            Command::Unique => Operator::Unique,
            Command::Sort => Operator::Sort(SortOrder::from_arg(value)),
            Command::Limit => Operator::Limit(parse_number(stage, command, value)?),
            Command::Regex => Operator::Regex(compile(stage, value)?),
        };

        Ok(op)
    }

    /// Threads `lines` through this operator.
    ///
    /// Only `unique` and `sort` pull lines here; the rest are lazy adapters.
    pub fn apply<'a>(self, lines: Lines<'a>, stage: Stage) -> Result<Lines<'a>, PipelineError> {
        let out = match self {
            Operator::Filter(needle) => filter(lines, needle),
            Operator::Map(index) => map(lines, stage, index),
            Operator::Unique => unique(lines)?,
            Operator::Sort(order) => sort(lines, order)?,
            Operator::Limit(count) => limit(lines, count),
            Operator::Regex(pattern) => regex_filter(lines, pattern),
        };

        Ok(out)
    }
}

/// Parses and applies one named operator to `lines`.
pub fn apply<'a>(
    lines: Lines<'a>,
    stage: Stage,
    command: &str,
    value: &str,
) -> Result<Lines<'a>, PipelineError> {
    Operator::parse(stage, command, value)?.apply(lines, stage)
}

pub fn filter<'a>(lines: Lines<'a>, needle: String) -> Lines<'a> {
    Box::new(lines.filter(move |line| match line {
        Ok(line) => line.contains(needle.as_str()),
        Err(_) => true,
    }))
}

/// Replaces each line with its `index`-th single-space separated field.
pub fn map<'a>(lines: Lines<'a>, stage: Stage, index: usize) -> Lines<'a> {
    Box::new(lines.enumerate().map(move |(n, line)| {
        let line = line?;
        line.split(' ')
            .nth(index)
            .map(str::to_owned)
            .ok_or_else(|| PipelineError::IndexOutOfRange {
                stage,
                index,
                fields: line.split(' ').count(),
                line: n + 1,
            })
    }))
}

/// Drops repeated lines, keeping the first occurrence of each.
pub fn unique<'a>(lines: Lines<'a>) -> Result<Lines<'a>, PipelineError> {
    let mut seen = AHashSet::new();
    let mut kept = Vec::new();

    for line in lines {
        let line = line?;
        if seen.insert(line.clone()) {
            kept.push(line);
        }
    }

    Ok(materialized(kept))
}

pub fn sort<'a>(lines: Lines<'a>, order: SortOrder) -> Result<Lines<'a>, PipelineError> {
    let mut all = lines.collect::<Result<Vec<_>, _>>()?;

    // Vec::sort is stable.
    match order {
        SortOrder::Ascending => all.sort(),
        SortOrder::Descending => all.sort_by(|a, b| b.cmp(a)),
    }

    Ok(materialized(all))
}

pub fn limit<'a>(lines: Lines<'a>, count: usize) -> Lines<'a> {
    Box::new(lines.take(count))
}

pub fn regex_filter<'a>(lines: Lines<'a>, pattern: Regex) -> Lines<'a> {
    Box::new(lines.filter(move |line| match line {
        Ok(line) => pattern.is_match(line),
        Err(_) => true,
    }))
}

fn materialized<'a>(lines: Vec<String>) -> Lines<'a> {
    Box::new(lines.into_iter().map(Ok))
}

fn parse_number(stage: Stage, command: Command, value: &str) -> Result<usize, PipelineError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| PipelineError::InvalidArgument {
            stage,
            command: command.as_str(),
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

fn compile(stage: Stage, pattern: &str) -> Result<Regex, PipelineError> {
    Regex::new(pattern).map_err(|source| PipelineError::InvalidPattern {
        stage,
        pattern: pattern.to_owned(),
        source,
    })
}
