use std::env;

use anyhow::Context;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());

        Self::parse(ip, &port)
    }

    fn parse(ip: String, port: &str) -> anyhow::Result<Self> {
        let port = port
            .trim()
            .parse::<u16>()
            .with_context(|| format!("SERVICE_PORT is not a valid port: {}", port))?;
        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig::parse("0.0.0.0".to_string(), "9000").unwrap();

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:9000");
    }

    #[test]
    fn should_reject_port_that_is_not_a_number() {
        let result = ServerConfig::parse("127.0.0.1".to_string(), "http");

        assert!(result.is_err());
    }
}
