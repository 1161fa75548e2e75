//! Database settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SOCIAL_*` environment variables or a config
//! file, in OrthoConfig's usual precedence, and are turned into a
//! [`PoolConfig`].

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use super::pool::PoolConfig;

/// Errors raised when the settings cannot produce a pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No database URL was configured.
    #[error("database URL missing: set --database-url or SOCIAL_DATABASE_URL")]
    MissingDatabaseUrl,
    /// The database URL was blank.
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,
    /// `max_connections` was zero.
    #[error("max_connections must be greater than zero")]
    ZeroMaxConnections,
    /// `connect_timeout_secs` was zero.
    #[error("connect_timeout_secs must be greater than zero")]
    ZeroConnectTimeout,
    /// `min_idle` asked for more idle connections than the pool may hold.
    #[error("min_idle ({min_idle}) must not exceed max_connections ({max_size})")]
    MinIdleExceedsMax { min_idle: u32, max_size: u32 },
}

/// Connection settings for the persistence layer.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SOCIAL")]
pub struct DatabaseSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: Option<u32>,
    /// Idle connections kept open.
    pub min_idle: Option<u32>,
    /// Checkout timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl DatabaseSettings {
    /// Return the configured URL, rejecting missing or blank values.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        match self.database_url.as_deref() {
            None => Err(SettingsError::MissingDatabaseUrl),
            Some(url) if url.trim().is_empty() => Err(SettingsError::EmptyDatabaseUrl),
            Some(url) => Ok(url),
        }
    }

    /// Build a pool configuration, keeping pool defaults for unset limits.
    ///
    /// An explicit `min_idle` above the pool size is rejected; the default
    /// idle floor is lowered to fit a smaller `max_connections`.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let mut config = PoolConfig::new(self.database_url()?);
        if let Some(max_size) = self.max_connections {
            if max_size == 0 {
                return Err(SettingsError::ZeroMaxConnections);
            }
            config = config.with_max_size(max_size);
        }

        let max_size = config.max_size();
        let min_idle = match self.min_idle {
            Some(min_idle) if min_idle > max_size => {
                return Err(SettingsError::MinIdleExceedsMax { min_idle, max_size });
            }
            Some(min_idle) => Some(min_idle),
            None => config.min_idle().map(|idle| idle.min(max_size)),
        };
        config = config.with_min_idle(min_idle);

        if let Some(secs) = self.connect_timeout_secs {
            if secs == 0 {
                return Err(SettingsError::ZeroConnectTimeout);
            }
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
