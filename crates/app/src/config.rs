//! Storefront configuration

use std::path::PathBuf;

use clap::Args;
use jiff::tz::TimeZone;
use url::Url;

/// Storefront settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Base URL the storefront pages are served from
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: Url,

    /// Identifier of the shopper's cart and order history
    #[arg(long, env = "STOREFRONT_USER_ID", default_value = "user@email.com")]
    pub user_id: String,

    /// YAML catalog to load instead of the bundled one
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Time zone order dates are shown in
    #[arg(long, env = "STOREFRONT_TIMEZONE", default_value = "UTC")]
    pub timezone: String,
}

impl StoreConfig {
    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the zone is not in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, jiff::Error> {
        if self.timezone.eq_ignore_ascii_case("UTC") {
            return Ok(TimeZone::UTC);
        }

        TimeZone::get(&self.timezone)
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
