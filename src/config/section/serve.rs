//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 3000                 # HTTP port number
//!
//! [serve.subscribe]
//! enable = true               # Accept POST /api/subscribe
//! file = "subscribers.jsonl"  # Subscriber list (relative to site root)
//! hourly_limit = 5            # Requests per client per hour
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Local server settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "serve")]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    #[config(default = "127.0.0.1")]
    pub interface: IpAddr,

    /// HTTP port number.
    #[config(default = "3000", inline_doc = "HTTP port number.")]
    pub port: u16,

    /// Subscribe endpoint settings.
    #[config(sub)]
    pub subscribe: SubscribeConfig,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 3000,
            subscribe: SubscribeConfig::default(),
        }
    }
}

impl ServeConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        self.subscribe.validate(diag);
    }
}

/// Subscribe endpoint configuration.
///
/// The endpoint appends confirmed addresses to a JSONL file and rate-limits
/// clients per hour. Disable it to serve a fully static preview.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "serve.subscribe")]
pub struct SubscribeConfig {
    #[config(default = "true", inline_doc = "Accept POST /api/subscribe.")]
    pub enable: bool,

    /// Subscriber list, one JSON record per line (relative to site root).
    #[config(default = "subscribers.jsonl", inline_doc = "Subscriber list (relative to site root).")]
    pub file: PathBuf,

    /// Requests per client per hour.
    #[config(default = "5", inline_doc = "Requests per client per hour.")]
    pub hourly_limit: u32,
}

impl Default for SubscribeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            file: "subscribers.jsonl".into(),
            hourly_limit: 5,
        }
    }
}

impl SubscribeConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.enable && self.hourly_limit == 0 {
            diag.error_with_hint(
                Self::FIELDS.hourly_limit,
                "must be at least 1",
                "set hourly_limit = 5, or disable the endpoint",
            );
        }
    }
}
