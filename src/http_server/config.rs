//! HTTP Server Configuration
//!
//! Host, port, and CORS settings, loadable from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080).
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty means permissive (development).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a config with the specified port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config '{}': {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("invalid config '{}': {}", path.display(), e))
    }

    /// The socket address string to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
