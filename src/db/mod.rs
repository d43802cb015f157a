pub mod department;
pub mod employee;
pub mod role;

use log::info;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DbConfig;
use crate::errors::AppError;

/// Opens the single connection the tool runs every query on.
pub async fn connect(config: &DbConfig) -> Result<PgPool, AppError> {
    let options = config.connect_options()?;
    let pool = connect_with(options, config.connect_timeout).await?;
    info!("Connected to {}", config.describe());
    Ok(pool)
}

pub async fn connect_with(options: PgConnectOptions, timeout: Duration) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(timeout)
        .connect_with(options)
        .await
        .map_err(|err| AppError::DatabaseError(format!("Failed to connect to the database: {}", err)))
}
