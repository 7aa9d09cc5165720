//! Server configuration
//!
//! The service carries no environment-driven configuration; the listen
//! address is the only knob and defaults to the fixed historical port.

use std::net::{AddrParseError, SocketAddr};

/// Listen address configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl ServerConfig {
    /// The port the service has always listened on
    pub const DEFAULT_PORT: u16 = 3902;

    /// Default bind host
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";

    /// Resolve the configured host/port into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(self.host.parse()?, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_owned(),
            port: Self::DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3902");
    }

    #[test]
    fn test_bad_host_is_an_error() {
        let config = ServerConfig {
            host: "not-an-ip".to_owned(),
            port: 3902,
        };
        assert!(config.socket_addr().is_err());
    }
}
