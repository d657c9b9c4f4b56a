//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DOCCHAT_BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the variable that failed to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the variable that failed to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            None => DEFAULT_PORT,
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value })?,
        };
        let bind_addr = match non_blank(lookup("DOCCHAT_BIND_ADDR")) {
            None => DEFAULT_BIND_ADDR,
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr { var: "DOCCHAT_BIND_ADDR", value })?,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
