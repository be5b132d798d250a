use crate::proxy::handlers::QueryHandler;
use async_trait::async_trait;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};

/// Terminal gateway: every request is answered locally, nothing is proxied.
pub struct QueryGateway {
    route: String,
    query_handler: QueryHandler,
}

impl QueryGateway {
    pub fn new(route: String, query_handler: QueryHandler) -> Self {
        Self {
            route,
            query_handler,
        }
    }
}

#[async_trait]
impl ProxyHttp for QueryGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        Err(Error::new(Custom(
            "QueryGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        if session.req_header().uri.path() != self.route {
            tracing::debug!(path = session.req_header().uri.path(), "no route matched");
            session.respond_error(404).await?;
            return Ok(true);
        }

        self.query_handler.handle(session).await
    }
}
