//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

use common::{Currency, Percent};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

#[cfg(doc)]
use infra::Page;

use self::domain::{
    package::Fees,
    site::{Collector, ConversionEvent},
    staffing::Brackets,
};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// [`Currency`] quotes are priced in.
    #[default(Currency::Usd)]
    pub currency: Currency,

    /// [`Fees`] bar packages are priced with.
    pub fees: Fees,

    /// Staffing [`Brackets`] of bar packages.
    pub staffing: Brackets,

    /// Scrolled [`Percent`] past which the floating header is shown.
    #[default(Percent::saturating(Decimal::from(5)))]
    pub header_threshold: Percent,

    /// Path segment of pages whose querystring is never propagated.
    #[default("crm".to_owned())]
    pub excluded_path: String,

    /// [`ConversionEvent`] tracked on phone calls.
    pub conversion: ConversionEvent,

    /// [`Collector`]s receiving the [`ConversionEvent`]s.
    #[default(vec![Collector::Facebook, Collector::Google])]
    pub collectors: Vec<Collector>,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<P> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Page`] of this [`Service`].
    page: P,
}

impl<P> Service<P> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, page: P) -> Self {
        Self { config, page }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Page`] of this [`Service`].
    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }
}
