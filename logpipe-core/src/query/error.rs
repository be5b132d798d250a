use crate::pipeline::PipelineError;
use http::StatusCode;
use thiserror::Error;

/// Everything that can end a `/perform_query` request without a result.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("missing required parameter '{name}'")]
    MissingParam { name: &'static str },

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("{file_name} does not exist")]
    FileNotFound { file_name: String },

    #[error("{file_name} resolves outside the data directory")]
    PathTraversal { file_name: String },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl QueryError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam { .. } | Self::InvalidParam { .. } => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::FileNotFound { .. } => StatusCode::NOT_FOUND,
            Self::PathTraversal { .. } => StatusCode::FORBIDDEN,
            Self::Pipeline(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "missing_param",
            Self::InvalidParam { .. } => "invalid_param",
            Self::BodyTooLarge { .. } => "body_too_large",
            Self::FileNotFound { .. } => "file_not_found",
            Self::PathTraversal { .. } => "path_traversal",
            Self::Pipeline(err) => err.code(),
        }
    }
}
