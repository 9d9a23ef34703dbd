use std::net::{IpAddr, SocketAddr};

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use dotenv::dotenv;
use drumpad_server::config::Config;
use drumpad_server::{create_routes, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load .env file
    dotenv().ok();

    let config = Config::default();

    // Setup logging
    env_logger::init();

    if !config.static_dir.join("index.html").exists() {
        log::warn!(
            "{} has no index.html, did you run wasm-pack build?",
            config.static_dir.display()
        );
    }

    let app = create_routes(&config.static_dir);
    let handle = Handle::new();

    let http_addr = config.http_addr()?;
    println!("Starting HTTP server on http://{}", display_addr(http_addr));

    let http_server = axum_server::bind(http_addr)
        .handle(handle.clone())
        .serve(app.clone().into_make_service());

    if !config.tls_enabled {
        return Ok(http_server.await?);
    }

    let https_addr = config.https_addr()?;
    let (cert_path, key_path) = config.tls_paths()?;
    let tls = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(ServerError::Tls)?;
    println!("Starting HTTPS server on https://{}", display_addr(https_addr));

    let https_server = axum_server::bind_rustls(https_addr, tls)
        .handle(handle)
        .serve(app.into_make_service());

    // Run both servers, the first to stop ends the process
    tokio::select! {
        result = http_server => {
            if let Err(e) = &result {
                log::error!("HTTP server error: {}", e);
            }
            Ok(result?)
        }
        result = https_server => {
            if let Err(e) = &result {
                log::error!("HTTPS server error: {}", e);
            }
            Ok(result?)
        }
    }
}

/// Address to print for humans: the LAN address when bound to all interfaces,
/// so the pads can be opened from a phone on the same network.
fn display_addr(addr: SocketAddr) -> SocketAddr {
    if !addr.ip().is_unspecified() {
        return addr;
    }
    let ip = local_ip_address::local_ip().unwrap_or(IpAddr::from([127, 0, 0, 1]));
    SocketAddr::new(ip, addr.port())
}
