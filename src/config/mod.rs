// Configuration module entry point
// Loads layered configuration (file, environment, defaults) and holds runtime state

mod state;
pub mod types;

use std::net::SocketAddr;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Missing file is fine: defaults bind 0.0.0.0:8080
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("AVATAR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Builder pre-populated with every default value
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("performance.shutdown_grace_period", 5)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|e| ServerError::InvalidAddress {
            addr,
            reason: format!("{e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Config {
        Config::builder()
            .and_then(|builder| builder.build())
            .and_then(|settings| settings.try_deserialize())
            .unwrap()
    }

    #[test]
    fn test_defaults_bind_all_interfaces_on_8080() {
        let cfg = defaults();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
        assert!(cfg.server.workers.is_none());
    }

    #[test]
    fn test_defaults_logging_and_performance() {
        let cfg = defaults();
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.performance.shutdown_grace_period, 5);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut cfg = defaults();
        cfg.server.host = "not a host".to_string();
        match cfg.get_socket_addr() {
            Err(ServerError::InvalidAddress { addr, .. }) => {
                assert_eq!(addr, "not a host:8080");
            }
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }
}
