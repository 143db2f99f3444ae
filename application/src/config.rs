//! [`Config`]-related definitions.

use common::{Currency, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain::{
    package::Fees,
    site::{Collector, ConversionEvent},
    staffing::Brackets,
};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Service configuration.
    #[serde(default)]
    pub service: Service,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// [`Currency`] quotes are priced in.
    #[default(Currency::Usd)]
    pub currency: Currency,

    /// [`Fees`] bar packages are priced with.
    pub fees: Fees,

    /// Upper bounds of the guest brackets, one more bartender per bracket.
    pub staffing: Brackets,

    /// Scrolled percentage past which the floating header is shown.
    #[default(Percent::saturating(Decimal::from(5)))]
    pub header_threshold: Percent,

    /// Path segment of pages whose querystring is never propagated.
    #[default("crm".to_owned())]
    pub excluded_path: String,

    /// Conversion tracked on phone calls.
    pub conversion: ConversionEvent,

    /// Analytics collectors receiving the conversions.
    #[default(vec![Collector::Facebook, Collector::Google])]
    pub collectors: Vec<Collector>,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            currency,
            fees,
            staffing,
            header_threshold,
            excluded_path,
            conversion,
            collectors,
        } = value;
        Self {
            currency,
            fees,
            staffing,
            header_threshold,
            excluded_path,
            conversion,
            collectors,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Config, Service};

    #[test]
    fn defaults_match_service() {
        let app = service::Config::from(Service::default());
        let svc = service::Config::default();

        assert_eq!(app.currency, svc.currency);
        assert_eq!(app.fees, svc.fees);
        assert_eq!(app.staffing, svc.staffing);
        assert_eq!(app.header_threshold, svc.header_threshold);
        assert_eq!(app.excluded_path, svc.excluded_path);
        assert_eq!(app.conversion, svc.conversion);
        assert_eq!(app.collectors, svc.collectors);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::new("does-not-exist.toml").unwrap();

        assert_eq!(config.service.excluded_path, "crm");
        assert_eq!(config.service.collectors.len(), 2);
    }
}
