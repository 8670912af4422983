//! Auth Config

use clap::Args;
use jiff::SignedDuration;

/// Session authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Lifetime of session tokens issued at login, in hours
    #[arg(
        long,
        env = "SESSION_TTL_HOURS",
        default_value_t = 24_i64,
        value_parser = clap::value_parser!(i64).range(1..=8_760)
    )]
    pub session_ttl_hours: i64,
}

impl AuthConfig {
    /// Session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(self.session_ttl_hours)
    }
}
