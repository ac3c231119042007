use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::CacheStore;
use crate::http::connection::Connection;

/// Binds the listening socket: address reuse on, fixed backlog.
///
/// Any failure here is fatal; the caller reports it and exits nonzero.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg.listen_addr.parse()?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;

    Ok(socket.listen(cfg.backlog)?)
}

/// Accept loop. Connections are handled one at a time, fully, in arrival
/// order; a slow client holds up everyone behind it. An accept failure is
/// transient: log it and try again immediately.
pub async fn serve(
    listener: TcpListener,
    cfg: Arc<Config>,
    store: CacheStore,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!("accept failed: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, store.clone(), cfg.clone());
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}

pub async fn run(cfg: Arc<Config>, store: CacheStore) -> anyhow::Result<()> {
    let listener = bind(&cfg)?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg, store).await
}
