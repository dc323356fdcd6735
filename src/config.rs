//! Process configuration for the relational store.
//!
//! Configuration is read from the environment once at process entry and
//! passed down explicitly; nothing in this crate consults the environment
//! after startup.

use crate::task::adapters::postgres::TaskPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::env;
use std::num::NonZeroU32;
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection string.
pub const DATABASE_URL_VAR: &str = "TASKS_DATABASE_URL";

/// Environment variable overriding the connection pool size.
pub const POOL_SIZE_VAR: &str = "TASKS_DATABASE_POOL_SIZE";

/// Pool size used when no override is present.
const DEFAULT_POOL_SIZE: u32 = 5;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value '{value}' for {variable}: {source}")]
    InvalidPoolSize {
        /// Variable that held the rejected value.
        variable: &'static str,
        /// The rejected value.
        value: String,
        /// Parse failure detail.
        source: std::num::ParseIntError,
    },

    /// The configured pool size is zero.
    #[error("pool size must be a positive integer")]
    ZeroPoolSize,

    /// The connection pool could not be constructed.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Relational store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
    max_connections: u32,
}

impl DatabaseConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
        }
    }

    /// Loads the configuration from the environment.
    ///
    /// `TASKS_DATABASE_URL` is required; `TASKS_DATABASE_POOL_SIZE` is
    /// optional and defaults to 5.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when the connection string is
    /// absent and [`ConfigError::InvalidPoolSize`] when the pool size
    /// override is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingVar(DATABASE_URL_VAR))?;
        let max_connections = match env::var(POOL_SIZE_VAR) {
            // NonZeroU32 rejects zero alongside non-numeric values.
            Ok(raw) => raw
                .parse::<NonZeroU32>()
                .map_err(|source| ConfigError::InvalidPoolSize {
                    variable: POOL_SIZE_VAR,
                    value: raw.clone(),
                    source,
                })?
                .get(),
            Err(_) => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }

    /// Returns the connection string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Builds the r2d2 connection pool backing the `PostgreSQL` adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPoolSize`] when the configured size is
    /// zero and [`ConfigError::Pool`] when the pool cannot be constructed.
    pub fn create_pool(&self) -> Result<TaskPgPool, ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        let manager = ConnectionManager::<PgConnection>::new(self.url.clone());
        Ok(Pool::builder()
            .max_size(self.max_connections)
            .build(manager)?)
    }
}
