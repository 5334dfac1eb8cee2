//! Application configuration

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface the HTTP server binds to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Host language file to use instead of the bundled English strings
    pub lang_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_host: env::var("MYZ_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()
                .context("MYZ_SERVER_HOST must be a valid IP address")?,
            server_port: env::var("MYZ_SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("MYZ_SERVER_PORT must be a valid port number")?,
            lang_path: env::var("MYZ_LANG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: IpAddr::from([0, 0, 0, 0]),
            server_port: 3000,
            lang_path: None,
        }
    }
}
