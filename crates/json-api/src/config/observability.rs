//! Tracing export and request timing config

use std::time::Duration;

use clap::Args;

/// Request timing and trace export settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Requests slower than this are logged at `warn`
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,

    /// OTLP trace export.
    #[command(flatten)]
    pub otel: OtelConfig,
}

/// OpenTelemetry export settings. Export is off unless `OTEL_ENABLED` is set.
#[derive(Debug, Args)]
pub struct OtelConfig {
    /// Export request and service spans over OTLP
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false)]
    pub enabled: bool,

    /// Continue traces from an incoming `traceparent` header
    #[arg(
        long = "otel-parent-propagation",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false
    )]
    pub parent_propagation: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long = "otel-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// Export timeout in seconds
    #[arg(
        long = "otel-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3_u64
    )]
    pub timeout_seconds: u64,

    /// `service.name` resource attribute
    #[arg(
        long = "otel-service-name",
        env = "OTEL_SERVICE_NAME",
        default_value = "shopcart-json"
    )]
    pub service_name: String,

    /// `service.version` resource attribute
    #[arg(
        long = "otel-service-version",
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub service_version: String,

    /// `deployment.environment.name` resource attribute
    #[arg(
        long = "otel-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Fraction of root traces to sample, 0.0 to 1.0
    #[arg(
        long = "otel-sample-ratio",
        env = "OTEL_TRACE_SAMPLE_RATIO",
        default_value_t = 1.0_f64,
        value_parser = parse_sample_ratio
    )]
    pub sample_ratio: f64,
}

impl OtelConfig {
    /// Exporter call timeout.
    #[must_use]
    pub fn export_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Remote parents are only honoured while spans are being exported.
    #[must_use]
    pub fn continues_remote_traces(&self) -> bool {
        self.enabled && self.parent_propagation
    }
}

fn parse_sample_ratio(value: &str) -> Result<f64, String> {
    let ratio: f64 = value
        .parse()
        .map_err(|e| format!("sample ratio must be a number: {e}"))?;

    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("sample ratio must be between 0.0 and 1.0, got {ratio}"))
    }
}
