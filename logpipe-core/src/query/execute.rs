use crate::files::{ResolveError, resolve_data_file};
use crate::pipeline::{PipelineOutput, run_pipeline};
use crate::query::{Query, QueryError};
use crate::source::LineSource;
use std::path::Path;

/// Resolves the requested file inside `data_dir` and runs both stages over it.
///
/// The file handle lives only as long as this call.
pub fn execute_query(data_dir: &Path, query: &Query) -> Result<PipelineOutput, QueryError> {
    let path = resolve_data_file(data_dir, &query.file_name)
        .map_err(|e| map_resolve_error(e, &query.file_name))?;

    tracing::debug!(path = %path.display(), "resolved data file");

    let lines = LineSource::open(&path)?;
    let output = run_pipeline(lines, query.first_stage(), query.second_stage())?;

    Ok(output)
}

fn map_resolve_error(err: ResolveError, file_name: &str) -> QueryError {
    match err {
        ResolveError::NotFound => QueryError::FileNotFound {
            file_name: file_name.to_owned(),
        },
        ResolveError::Forbidden => QueryError::PathTraversal {
            file_name: file_name.to_owned(),
        },
        ResolveError::BadPath => QueryError::InvalidParam {
            name: "fileName",
            reason: format!("'{file_name}' is not a valid file name"),
        },
    }
}
