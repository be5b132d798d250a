use crate::pipeline::Stage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage}: unknown command '{command}'")]
    UnknownCommand { stage: Stage, command: String },

    #[error("{stage}: invalid argument '{value}' for '{command}': {reason}")]
    InvalidArgument {
        stage: Stage,
        command: &'static str,
        value: String,
        reason: String,
    },

    #[error("{stage}: invalid regex '{pattern}': {source}")]
    InvalidPattern {
        stage: Stage,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{stage}: line {line} has {fields} field(s), index {index} is out of range")]
    IndexOutOfRange {
        stage: Stage,
        index: usize,
        fields: usize,
        line: usize,
    },

    #[error("failed to read log file: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Stable identifier used in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "unknown_command",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::Io(_) => "io_error",
        }
    }

    /// True when the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
