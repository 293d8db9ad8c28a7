//! # Static File Server
//!
//! Serves a local directory over HTTP for testing the PWA on a desktop or a
//! phone on the same network. Every response carries the headers a service
//! worker needs.
//!
//! ## Usage
//!
//! ```bash
//! calcicon serve --root . --listen 0.0.0.0:8000
//! ```

mod state;

pub use state::ServerConfig;

use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use std::net::{IpAddr, UdpSocket};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::error::IconError;

/// Lets a worker at any script path control the whole origin.
pub const SERVICE_WORKER_ALLOWED: HeaderName = HeaderName::from_static("service-worker-allowed");

/// Build the router: the root directory plus the three PWA headers.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(&config.root))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            SERVICE_WORKER_ALLOWED,
            HeaderValue::from_static("/"),
        ))
}

/// Start the HTTP server and run until Ctrl+C.
///
/// ## Example
///
/// ```no_run
/// use calcicon::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), calcicon::error::IconError> {
/// serve(ServerConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), IconError> {
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to bind to {}: {}", config.listen_addr, e),
            )
        })?;

    let port = listener.local_addr()?.port();
    println!("[server] serving {}", config.root.display());
    println!("[server] local: http://localhost:{}", port);
    if let Some(ip) = lan_address() {
        println!("[server] on your phone: http://{}:{}", ip, port);
        println!("[server] make sure the phone is on the same Wi-Fi network");
    }
    println!("[server] press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("[server] stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("[server] failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Best-effort LAN address of this machine.
///
/// Connecting a UDP socket sends nothing; it only makes the OS pick the
/// outbound interface.
fn lan_address() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}
