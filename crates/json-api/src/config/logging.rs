//! Logging Config

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs, one object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info` or `info,shopcart_app=debug`
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = parse_filter_directives
    )]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Cap HTTP, gRPC and SQL driver targets at `warn`
    #[arg(
        long,
        env = "LOG_QUIET_DEPENDENCIES",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub log_quiet_dependencies: bool,
}

fn parse_filter_directives(value: &str) -> Result<String, String> {
    EnvFilter::try_new(value)
        .map(|_filter| value.to_owned())
        .map_err(|e| format!("invalid log filter: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_level_and_per_target_directives() {
        assert_eq!(
            parse_filter_directives("info,shopcart_app=debug").as_deref(),
            Ok("info,shopcart_app=debug")
        );
    }

    #[test]
    fn rejects_malformed_directives() {
        assert!(
            parse_filter_directives("shopcart_app=loud").is_err(),
            "unknown level should be rejected"
        );
    }
}
