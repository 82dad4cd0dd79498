//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use quill_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            config.max_connections =
                parse_var("DB_MAX_CONNECTIONS").unwrap_or(config.max_connections);
            config.min_connections =
                parse_var("DB_MIN_CONNECTIONS").unwrap_or(config.min_connections);
            config
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(3000),
            database,
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
