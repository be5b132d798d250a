use crate::conf::LogpipeConfig;
use crate::proxy::{QueryGateway, QueryHandler};
use anyhow::{Error, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;

/// Run the Pingora server with the given configuration.
pub fn run(config: LogpipeConfig) -> Result<()> {
    let server = build_pingora_server(config)?;

    tracing::info!("logpipe started");
    server.run_forever();
}

/// Build the Pingora server.
pub fn build_pingora_server(config: LogpipeConfig) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new()
            .ok_or_else(|| anyhow::anyhow!("could not construct pingora server configuration"))?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let handler = QueryHandler::new(config.query.data_dir.clone(), config.query.max_body_bytes);
    let gateway = QueryGateway::new(config.query.route.clone(), handler);

    let mut svc = http_proxy_service(&server.configuration, gateway);
    if let Some(tls) = &config.server.tls {
        svc.add_tls(&config.server.listen, &tls.cert, &tls.key)?;
    } else {
        svc.add_tcp(&config.server.listen);
    }

    tracing::info!(
        listen = %config.server.listen,
        route = %config.query.route,
        data_dir = %config.query.data_dir.display(),
        tls = config.server.tls.is_some(),
        "query service configured"
    );

    server.add_service(svc);

    Ok(server)
}
