use std::env;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

use crate::errors::AppError;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the tracker database.
///
/// `url` wins over the discrete fields when present.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::ConfigError(format!("DB_PORT is not a valid port: {}", raw)))?,
            None => DEFAULT_DB_PORT,
        };

        let timeout_secs = match get("DB_CONNECT_TIMEOUT") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!("DB_CONNECT_TIMEOUT must be whole seconds: {}", raw))
            })?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        let config = DbConfig {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port,
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            database: get("DB_NAME"),
            connect_timeout: Duration::from_secs(timeout_secs),
        };

        if config.url.is_none() {
            if config.user.is_none() {
                return Err(AppError::ConfigError("DB_USER must be set".to_string()));
            }
            if config.database.is_none() {
                return Err(AppError::ConfigError("DB_NAME must be set".to_string()));
            }
        }

        Ok(config)
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, AppError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url)
                .map_err(|err| AppError::ConfigError(format!("invalid DATABASE_URL: {}", err)));
        }

        let mut options = PgConnectOptions::new().host(&self.host).port(self.port);
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        Ok(options)
    }

    /// Where the tool connects, without credentials.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!(
                "{}:{}/{}",
                self.host,
                self.port,
                self.database.as_deref().unwrap_or_default()
            ),
        }
    }
}
