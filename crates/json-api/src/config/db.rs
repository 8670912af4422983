//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Apply bundled migrations before serving requests.
    #[arg(long, env = "MIGRATE_ON_STARTUP", default_value_t = false)]
    pub migrate_on_startup: bool,
}
