//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the admin API binds to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Reject callers whose peer address is not loopback
    pub loopback_only: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 127.0.0.1)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LOOPBACK_ONLY` - Only serve loopback callers (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_host: env::var("SERVER_HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            loopback_only: env::var("LOOPBACK_ONLY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.loopback_only),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            server_port: 3000,
            loopback_only: true,
        }
    }
}

/// Parses a boolean-ish environment value. Unknown values yield None.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
