use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The operators a pipeline stage can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Filter,
    Map,
    Unique,
    Sort,
    Limit,
    Regex,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Filter => "filter",
            Command::Map => "map",
            Command::Unique => "unique",
            Command::Sort => "sort",
            Command::Limit => "limit",
            Command::Regex => "regex",
        }
    }
}

impl FromStr for Command {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filter" => Ok(Command::Filter),
            "map" => Ok(Command::Map),
            "unique" => Ok(Command::Unique),
            "sort" => Ok(Command::Sort),
            "limit" => Ok(Command::Limit),
            "regex" => Ok(Command::Regex),
            _ => Err("unknown command"),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an operator within the two-stage pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    First,
    Second,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::First => f.write_str("stage 1"),
            Stage::Second => f.write_str("stage 2"),
        }
    }
}

/// Direction used by the `sort` operator.
///
/// `"desc"` sorts descending; every other argument sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_arg(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}
