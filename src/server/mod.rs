//! # HTTP Transport
//!
//! A thin HTTP/1 front end over [`OrderClient`]. The queue itself knows nothing about HTTP;
//! [`routes::route`] maps each request onto one client call.
//!
//! Connection tasks live in a [`JoinSet`] owned by [`serve`]. Dropping the `serve` future
//! aborts them, which releases their client clones so the actor can shut down.

pub mod routes;

use crate::clients::OrderClient;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Accepts connections on `listener` forever, one task per connection.
pub async fn serve(listener: TcpListener, client: OrderClient) {
    let mut connections = JoinSet::new();
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        warn!(error = %e, "Accept failed");
                        tokio::time::sleep(Duration::from_millis(100)).await;
                        continue;
                    }
                };
                debug!(%peer, "Connection accepted");

                let client = client.clone();
                connections.spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let client = client.clone();
                        async move { Ok::<_, Infallible>(routes::route(&client, req).await) }
                    });
                    if let Err(e) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        debug!(%peer, error = %e, "Connection closed with error");
                    }
                });
            }
            // Reap finished connections
            Some(_) = connections.join_next() => {}
        }
    }
}
