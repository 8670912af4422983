//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    logging::LoggingConfig,
    observability::ObservabilityConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod observability;
pub(crate) mod server;

/// Shopcart JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shopcart-json", about = "Shopcart JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Session authentication settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    const REQUIRED: [&str; 3] = ["shopcart-json", "--database-url", "postgres://localhost/shop"];

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
        assert!(!config.database.migrate_on_startup, "migrations are opt-in");
        assert!(!config.observability.otel.enabled, "otel export is opt-in");
        assert_eq!(config.auth.session_ttl(), SignedDuration::from_hours(24));

        Ok(())
    }

    #[test]
    fn session_ttl_follows_configured_hours() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from(
            REQUIRED.into_iter().chain(["--session-ttl-hours", "2"]),
        )?;

        assert_eq!(config.auth.session_ttl(), SignedDuration::from_hours(2));

        Ok(())
    }

    #[test]
    fn out_of_range_sample_ratio_is_rejected() {
        let result = ServerConfig::try_parse_from(
            REQUIRED.into_iter().chain(["--otel-sample-ratio", "2.0"]),
        );

        assert!(result.is_err(), "sample ratio above 1.0 should not parse");
    }

    #[test]
    fn malformed_log_filter_is_rejected() {
        let result = ServerConfig::try_parse_from(
            REQUIRED.into_iter().chain(["--log-level", "shopcart_json=chatty"]),
        );

        assert!(result.is_err(), "unknown level should not parse");
    }
}
