//! Accept loop entrypoint.
use std::io;
use std::sync::Arc;

use tokio::net::{TcpListener, ToSocketAddrs};

use crate::h1::serve_connection;
use crate::log::{error, info};
use crate::service::Service;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Bind `addr` and serve connections until the task is dropped.
pub async fn listen<S>(addr: impl ToSocketAddrs, service: S) -> io::Result<()>
where
    S: Service + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
{
    let tcp = TcpListener::bind(addr).await?;
    info!("listening on {}", tcp.local_addr()?);
    serve(tcp, service).await
}

/// Serve connections from an already bound listener.
///
/// Every accepted socket is driven on its own task; connections share the
/// service but nothing else.
pub async fn serve<S>(tcp: TcpListener, service: S) -> io::Result<()>
where
    S: Service + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
{
    let service = Arc::new(service);

    loop {
        match tcp.accept().await {
            Ok((stream, _)) => {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    serve_connection(stream, &*service).await;
                });
            }
            Err(err) => {
                error!("failed to accept connection: {err}");
            }
        }
    }
}
