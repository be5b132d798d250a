use crate::pipeline::PipelineOutput;
use crate::proxy::response::{send_error, send_method_not_allowed, send_output};
use crate::query::{Query, QueryError, QueryParams, execute_query};
use bytes::BytesMut;
use http::{Method, StatusCode};
use pingora::prelude::Session;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;

/// Serves the query endpoint: parses parameters, runs the pipeline and
/// writes either the plain-text result or a JSON error.
pub struct QueryHandler {
    data_dir: Arc<PathBuf>,
    max_body_bytes: usize,
}

impl QueryHandler {
    pub fn new(data_dir: PathBuf, max_body_bytes: usize) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
            max_body_bytes,
        }
    }

    pub(crate) async fn handle(&self, session: &mut Session) -> pingora::Result<bool> {
        let started = Instant::now();
        let method = session.req_header().method.clone();

        if method != Method::GET && method != Method::POST {
            send_method_not_allowed(session).await?;
            return Ok(true);
        }

        let query = match self.read_query(session, &method).await {
            Ok(q) => q,
            Err(err) => {
                tracing::warn!(error = %err, code = err.code(), "rejected query parameters");
                send_error(session, &err).await?;
                return Ok(true);
            }
        };

        match self.run(query.clone()).await {
            Ok(Ok(output)) => {
                tracing::info!(
                    file = %query.file_name,
                    command1 = %query.command1,
                    command2 = %query.command2,
                    lines = output.line_count,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "query completed"
                );
                send_output(session, &output).await?;
            }

            Ok(Err(err)) => {
                if err.status().is_server_error() {
                    tracing::error!(file = %query.file_name, error = %err, "query failed");
                } else {
                    tracing::warn!(
                        file = %query.file_name,
                        code = err.code(),
                        error = %err,
                        "query rejected"
                    );
                }
                send_error(session, &err).await?;
            }

            Err(join_err) => {
                tracing::error!(error = %join_err, "query task aborted");
                session
                    .respond_error(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
                    .await?;
            }
        }

        Ok(true)
    }

    async fn read_query(&self, session: &mut Session, method: &Method) -> Result<Query, QueryError> {
        let mut params = QueryParams::parse(session.req_header().uri.query().unwrap_or(""));

        if *method == Method::POST && is_form_encoded(session) {
            let body = self.read_body(session).await?;
            params.merge(&String::from_utf8_lossy(&body));
        }

        Query::from_params(&params)
    }

    async fn read_body(&self, session: &mut Session) -> Result<BytesMut, QueryError> {
        let mut body = BytesMut::new();

        loop {
            let chunk = session
                .read_request_body()
                .await
                .map_err(|e| QueryError::InvalidParam {
                    name: "body",
                    reason: e.to_string(),
                })?;

            let Some(chunk) = chunk else {
                break;
            };

            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(QueryError::BodyTooLarge {
                    limit: self.max_body_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    /// File I/O is synchronous, so the pipeline runs on the blocking pool.
    async fn run(
        &self,
        query: Query,
    ) -> Result<Result<PipelineOutput, QueryError>, JoinError> {
        let data_dir = self.data_dir.clone();
        tokio::task::spawn_blocking(move || execute_query(&data_dir, &query)).await
    }
}

fn is_form_encoded(session: &Session) -> bool {
    session
        .req_header()
        .headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}
