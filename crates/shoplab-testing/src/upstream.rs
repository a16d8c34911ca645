//! Loopback HTTP server standing in for an internal-only target.

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral loopback port and return its base URL
/// (`http://127.0.0.1:<port>`). The server lives until the runtime shuts down.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback upstream");
    let addr = listener.local_addr().expect("upstream local addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("upstream server error");
    });
    format!("http://{addr}")
}
