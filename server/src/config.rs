//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use leptos::config::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build server config from the Leptos metadata plus environment overrides.
    ///
    /// Optional:
    /// - `HOST`: bind address, defaults to the Leptos `site-addr` host
    /// - `PORT`: bind port, defaults to the Leptos `site-addr` port
    ///
    /// A `.env` file is honored when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos = conf.leptos_options;
        let addr = resolve_addr(
            std::env::var("HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            leptos.site_addr,
        )?;

        Ok(Self { addr, leptos })
    }
}

/// Apply `HOST` / `PORT` overrides on top of `default`.
pub fn resolve_addr(host: Option<&str>, port: Option<&str>, default: SocketAddr) -> Result<SocketAddr, ConfigError> {
    let ip = match host.map(str::trim).filter(|h| !h.is_empty()) {
        Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
        None => default.ip(),
    };
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        None => default.port(),
    };
    Ok(SocketAddr::new(ip, port))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
