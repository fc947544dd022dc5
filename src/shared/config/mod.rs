//! Application configuration module
//!
//! Provides the configuration types for the auth server. Values come from
//! process environment variables (optionally seeded from a `.env` file by the
//! binary) and are validated once at startup.

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Default name of the accounts table in the hosted store
pub const DEFAULT_USER_TABLE: &str = "user";

/// Which backing store holds account records
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreSettings {
    /// Hosted PostgREST endpoint (Supabase)
    Supabase {
        /// Project URL, e.g. `https://xyz.supabase.co`
        url: String,
        /// Service-role key sent as `apikey` and bearer token
        service_key: String,
        /// Table holding the accounts
        table: String,
    },
    /// Direct PostgreSQL connection
    Postgres {
        /// Connection string
        database_url: String,
    },
    /// Process-local store, lost on restart
    #[default]
    Memory,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// HS256 secret used to sign session tokens
    pub jwt_secret: String,
    /// Backing store selection
    pub store: StoreSettings,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Store selection order: Supabase when both `SUPABASE_URL` and
    /// `SUPABASE_SERVICE_ROLE_KEY` are present, then PostgreSQL when
    /// `DATABASE_URL` is present, otherwise the in-memory store.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(port) = get("SERVER_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }

        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }

        let store = match (get("SUPABASE_URL"), get("SUPABASE_SERVICE_ROLE_KEY")) {
            (Some(url), Some(service_key)) => StoreSettings::Supabase {
                url,
                service_key,
                table: get("SUPABASE_USER_TABLE").unwrap_or_else(|| DEFAULT_USER_TABLE.to_string()),
            },
            (Some(_), None) => return Err(ConfigError::Incomplete("SUPABASE_SERVICE_ROLE_KEY")),
            (None, Some(_)) => return Err(ConfigError::Incomplete("SUPABASE_URL")),
            (None, None) => match get("DATABASE_URL") {
                Some(database_url) => StoreSettings::Postgres { database_url },
                None => StoreSettings::Memory,
            },
        };

        builder.store(store).build()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    jwt_secret: Option<String>,
    store: StoreSettings,
}

impl AppConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Select the backing store
    pub fn store(mut self, store: StoreSettings) -> Self {
        self.store = store;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        Ok(AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            jwt_secret,
            store: self.store,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("incomplete store settings, {0} is not set")]
    Incomplete(&'static str),
}
