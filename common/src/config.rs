//! Client configuration.
//!
//! Compiled defaults with environment overrides. The agent endpoint is
//! configuration, not protocol: the default points at the Docker gateway
//! address the agent listens on.

use std::time::Duration;

/// Default agent host (Docker gateway as seen from inside a container).
pub const DEFAULT_AGENT_HOST: &str = "172.17.0.1";

/// Default agent port.
pub const DEFAULT_AGENT_PORT: u16 = 2076;

/// Default per-operation socket deadline.
///
/// Matches the read deadline the agent itself arms while waiting for the
/// authentication token.
pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Agent host address.
    pub host: String,
    /// Agent TCP port.
    pub port: u16,
    /// Deadline applied to connect and to every response read.
    pub io_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_AGENT_HOST.to_string(),
            port: DEFAULT_AGENT_PORT,
            io_timeout: DEFAULT_IO_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Loads configuration, applying environment overrides on top of the
    /// compiled defaults.
    ///
    /// Recognized variables: `UPLINK_AGENT_HOST`, `UPLINK_AGENT_PORT`,
    /// `UPLINK_IO_TIMEOUT_MS`. Unparseable values fall back to defaults.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("UPLINK_AGENT_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Some(port) = std::env::var("UPLINK_AGENT_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.port = port;
        }
        if let Some(ms) = std::env::var("UPLINK_IO_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.io_timeout = Duration::from_millis(ms);
        }
        config
    }

    /// Renders the agent endpoint as `host:port`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint(), "172.17.0.1:2076");
        assert_eq!(config.io_timeout, Duration::from_secs(10));
    }
}
