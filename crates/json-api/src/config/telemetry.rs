//! Logging & Telemetry Config

use std::time::Duration;

use clap::Args;

/// How log lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    Compact,

    /// One JSON object per event, with the active span attached.
    Json,
}

/// Log subscriber settings.
#[derive(Debug, Args)]
pub struct LogConfig {
    /// Default filter directive, used when `RUST_LOG` holds no valid filter
    #[arg(short = 'l', long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub level: String,

    /// Log format (compact, json)
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub format: LogFormat,

    /// Include the source file and line in compact logs
    #[arg(
        long = "log-source-location",
        env = "LOG_SOURCE_LOCATION",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub source_location: bool,
}

impl LogConfig {
    /// Filter applied when `RUST_LOG` is unset or unparseable.
    ///
    /// Chatty dependencies are held at `warn` whatever the chosen level.
    #[must_use]
    pub fn fallback_directives(&self) -> String {
        format!(
            "{},sqlx=warn,reqwest=warn,h2=warn,hyper=warn,tonic=warn,opentelemetry=warn",
            self.level
        )
    }
}

/// OpenTelemetry export and request timing settings.
#[derive(Debug, Args)]
pub struct TelemetryConfig {
    /// Export spans over OTLP
    #[arg(
        long = "otel-enabled",
        env = "OTEL_ENABLED",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub export_enabled: bool,

    /// Continue traces named by an inbound `traceparent` header
    #[arg(
        long = "otel-parent-propagation-enabled",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub parent_propagation: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long = "otel-exporter-otlp-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub otlp_endpoint: String,

    /// OTLP export timeout in seconds
    #[arg(
        long = "otel-exporter-otlp-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3
    )]
    pub otlp_timeout_seconds: u64,

    /// Service name reported on every span
    #[arg(long = "otel-service-name", env = "OTEL_SERVICE_NAME", default_value = "offora-json")]
    pub service_name: String,

    /// Service version reported on every span
    #[arg(
        long = "otel-service-version",
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub service_version: String,

    /// Deployment environment reported on every span
    #[arg(
        long = "otel-deployment-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Fraction of new traces to sample
    #[arg(long = "otel-trace-sample-ratio", env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0)]
    pub sample_ratio: f64,

    /// Requests slower than this many milliseconds are logged as warnings
    #[arg(long = "slow-request-threshold-ms", env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_ms: u64,
}

impl TelemetryConfig {
    #[must_use]
    pub fn otlp_timeout(&self) -> Duration {
        Duration::from_secs(self.otlp_timeout_seconds)
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_ms)
    }

    /// Sample ratio limited to `[0.0, 1.0]`; an unparseable `NaN` samples everything.
    #[must_use]
    pub fn sample_ratio(&self) -> f64 {
        if self.sample_ratio.is_nan() {
            return 1.0;
        }

        self.sample_ratio.clamp(0.0, 1.0)
    }

    /// Parent extraction only applies when spans are exported somewhere.
    #[must_use]
    pub fn propagates_parent(&self) -> bool {
        self.export_enabled && self.parent_propagation
    }
}
