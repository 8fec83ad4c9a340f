use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, cfg.clone()).await
}

/// Accept loop over an already-bound listener.
///
/// Connections are admitted through a semaphore: the permit is taken before
/// `accept` and rides along in the worker task, so at most
/// `cfg.max_connections` workers are alive and the excess queues in the OS
/// backlog. Workers are otherwise independent, the loop never waits on one.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let limiter = Arc::new(Semaphore::new(cfg.max_connections));

    loop {
        let permit = limiter.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let static_files = cfg.static_files.clone();
        tokio::spawn(async move {
            let _permit = permit;
            let mut conn = Connection::new(socket, peer, static_files);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
