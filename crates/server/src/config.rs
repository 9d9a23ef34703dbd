use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ServerError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tls_enabled: bool,
    pub tls_port: u16,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    /// Directory holding index.html and the wasm-pack output.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }
}

impl Config {
    /// Builds a config from a variable lookup, `env::var` in production.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3030),
            tls_enabled: var("TLS_ENABLED")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            tls_port: var("TLS_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3443),
            cert_path: var("CERT_PATH"),
            key_path: var("KEY_PATH"),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("www")),
        }
    }

    pub fn http_addr(&self) -> Result<SocketAddr, ServerError> {
        parse_addr(&self.host, self.port)
    }

    pub fn https_addr(&self) -> Result<SocketAddr, ServerError> {
        parse_addr(&self.host, self.tls_port)
    }

    /// Certificate and key paths, required once TLS is enabled.
    pub fn tls_paths(&self) -> Result<(&str, &str), ServerError> {
        let cert = self
            .cert_path
            .as_deref()
            .ok_or(ServerError::MissingTlsPath("CERT_PATH"))?;
        let key = self
            .key_path
            .as_deref()
            .ok_or(ServerError::MissingTlsPath("KEY_PATH"))?;
        Ok((cert, key))
    }
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", host, port);
    addr.parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })
}
