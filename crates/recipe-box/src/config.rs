//! Application configuration

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the HTTP listener on
    pub host: IpAddr,

    /// Port to bind the HTTP listener on (0 picks an ephemeral port)
    pub port: u16,

    /// Pre-populate the store with demo recipes on startup
    pub seed_recipes: bool,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("RECIPE_BOX_HOST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),

            port: env::var("RECIPE_BOX_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),

            seed_recipes: env::var("RECIPE_BOX_SEED_RECIPES")
                .ok()
                .and_then(|s| parse_bool(&s))
                .unwrap_or(true),

            request_timeout_secs: env::var("RECIPE_BOX_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),

            max_body_bytes: env::var("RECIPE_BOX_MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
        }
    }

    /// Loopback listener on an ephemeral port, seeded store
    pub fn for_tests() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            seed_recipes: true,
            request_timeout_secs: 5,
            max_body_bytes: 64 * 1024,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
