use anyhow::{Context, Result};
use std::{env, net::IpAddr, sync::OnceLock};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables. Subsequent
    /// calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. The service cannot start without
    /// a valid listen address.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| Self::load().expect("failed to load application configuration"))
    }

    /// Load all configuration from environment variables
    pub fn load() -> Result<Self> {
        let server = ServerConfig::load()?;

        Ok(Self { server })
    }
}

impl ServerConfig {
    const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
    const DEFAULT_PORT: &str = "1977";

    fn load() -> Result<Self> {
        Self::from_values(
            env::var("ALARM_NODE_BIND_ADDRESS").ok(),
            env::var("ALARM_NODE_PORT").ok(),
        )
    }

    fn from_values(bind_address: Option<String>, port: Option<String>) -> Result<Self> {
        let bind_address = bind_address
            .as_deref()
            .unwrap_or(Self::DEFAULT_BIND_ADDRESS)
            .parse::<IpAddr>()
            .context("failed to parse ALARM_NODE_BIND_ADDRESS: invalid format")?;

        let port = port
            .as_deref()
            .unwrap_or(Self::DEFAULT_PORT)
            .parse::<u16>()
            .context("failed to parse ALARM_NODE_PORT: invalid format")?;

        Ok(Self { bind_address, port })
    }
}
