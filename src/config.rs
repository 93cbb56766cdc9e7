// Configuration module
// Resolves process identity from the environment at startup

use serde::Deserialize;
use std::net::SocketAddr;

/// Server configuration, resolved once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_name: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Recognized variables:
    /// - `PORT` - TCP port to listen on (default 3000)
    /// - `SERVER_NAME` - identity reported in responses (default: machine hostname)
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("port", 3000)?
            .set_default("server_name", crate::system::hostname())?
            .build()?;

        settings.try_deserialize()
    }

    /// Listen address: all interfaces on the configured port
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
