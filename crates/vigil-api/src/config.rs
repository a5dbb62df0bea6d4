// Server configuration

/// Listen address settings for the receiver
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Socket address string for TCP bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All environment manipulation lives in this single test so parallel
    // test threads never observe each other's variables.
    #[test]
    fn test_from_env_defaults_and_overrides() {
        std::env::remove_var("SERVER_HOST");
        std::env::remove_var("SERVER_PORT");

        let config = ServerConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.addr(), "0.0.0.0:8000");

        std::env::set_var("SERVER_HOST", "127.0.0.1");
        std::env::set_var("SERVER_PORT", "9100");

        let config = ServerConfig::from_env();
        assert_eq!(config.addr(), "127.0.0.1:9100");

        // Unparseable port falls back to the default
        std::env::set_var("SERVER_PORT", "every");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 8000);

        std::env::remove_var("SERVER_HOST");
        std::env::remove_var("SERVER_PORT");
    }
}
