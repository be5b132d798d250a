use crate::pipeline::PipelineOutput;
use crate::query::QueryError;
use http::{StatusCode, header};
use pingora::prelude::Session;
use pingora_http::ResponseHeader;

pub const LINE_COUNT_HEADER: &str = "x-logpipe-lines";

/// Writes a pipeline result. An empty result set is `204 No Content`.
pub(crate) async fn send_output(
    session: &mut Session,
    output: &PipelineOutput,
) -> pingora::Result<()> {
    if output.is_empty() {
        let mut resp = ResponseHeader::build(StatusCode::NO_CONTENT, None)?;
        resp.insert_header(LINE_COUNT_HEADER, "0")?;
        session.write_response_header(Box::new(resp), true).await?;
        return Ok(());
    }

    let body = output.body.clone().into_bytes();

    let mut resp = ResponseHeader::build(StatusCode::OK, None)?;
    resp.insert_header(header::CONTENT_TYPE, "text/plain; charset=utf-8")?;
    resp.insert_header(header::CONTENT_LENGTH, body.len().to_string())?;
    resp.insert_header(LINE_COUNT_HEADER, output.line_count.to_string())?;

    session.write_response_header(Box::new(resp), false).await?;
    session.write_response_body(Some(body.into()), true).await?;

    Ok(())
}

pub(crate) async fn send_error(session: &mut Session, err: &QueryError) -> pingora::Result<()> {
    let body = serde_json::json!({
        "error": err.code(),
        "message": err.to_string(),
    })
    .to_string()
    .into_bytes();

    send_json_response(session, err.status(), body).await
}

pub(crate) async fn send_method_not_allowed(session: &mut Session) -> pingora::Result<()> {
    let mut resp = ResponseHeader::build(StatusCode::METHOD_NOT_ALLOWED, None)?;
    resp.insert_header(header::ALLOW, "GET, POST")?;
    resp.insert_header(header::CONTENT_LENGTH, "0")?;
    session.write_response_header(Box::new(resp), true).await?;
    Ok(())
}

async fn send_json_response(
    session: &mut Session,
    status: StatusCode,
    body: Vec<u8>,
) -> pingora::Result<()> {
    let mut resp = ResponseHeader::build(status, None)?;
    resp.insert_header(header::CONTENT_TYPE, "application/json")?;
    resp.insert_header(header::CONTENT_LENGTH, body.len().to_string())?;

    session.write_response_header(Box::new(resp), false).await?;
    session.write_response_body(Some(body.into()), true).await?;

    Ok(())
}
