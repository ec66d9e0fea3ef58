//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    payments::PaymentsConfig,
    server::ServerRuntimeConfig,
    telemetry::{LogConfig, TelemetryConfig},
};

pub(crate) mod db;
pub(crate) mod payments;
pub(crate) mod server;
pub(crate) mod telemetry;

/// Offora JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "offora-json", about = "Offora JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Log output settings.
    #[command(flatten)]
    pub log: LogConfig,

    /// Trace export and request timing settings.
    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Razorpay subscription payment settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // A missing .env file is fine
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
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 5] = [
        "offora-json",
        "--database-url",
        "postgres://localhost/offora",
        "--razorpay-key-id",
        "rzp_test_key",
    ];

    #[test]
    fn test_defaults_apply_when_only_required_values_given() -> TestResult {
        let config = ServerConfig::try_parse_from(
            REQUIRED
                .into_iter()
                .chain(["--razorpay-key-secret", "secret"]),
        )?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.telemetry.slow_request_ms, 1_000);
        assert_eq!(
            config.payments.razorpay_api_base,
            offora_app::payments::DEFAULT_RAZORPAY_API_BASE
        );

        Ok(())
    }

    #[test]
    fn test_missing_key_secret_is_rejected() {
        let result = ServerConfig::try_parse_from(REQUIRED);

        if std::env::var_os("RAZORPAY_KEY_SECRET").is_none() {
            assert!(result.is_err(), "key secret must be supplied");
        }
    }

    #[test]
    fn test_json_log_format_is_selectable() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED.into_iter().chain([
            "--razorpay-key-secret",
            "secret",
            "--log-format",
            "json",
        ]))?;

        assert_eq!(config.log.format, telemetry::LogFormat::Json);

        Ok(())
    }
}
