//! [`Request`]-related definitions.

use std::{collections::HashMap, fs, io};

use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain::{
    offering::{self, Attributes, Selector},
    package::Form,
    quote::AdHocUnits,
};

/// Quote request, as submitted by the quote form.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Raw number of guests.
    pub guests: Option<Decimal>,

    /// Raw event duration, in hours.
    pub hours: Option<Decimal>,

    /// Raw duration the suggested prices were calibrated against.
    pub assumed_base_hours: Option<Decimal>,

    /// Markup [`Attributes`] of every quoted service.
    pub services: Vec<Attributes>,

    /// Ad hoc units counted on the form, keyed by their [`Selector`].
    pub ad_hoc_units: AdHocCounts,

    /// Bar package [`Form`], if requested.
    pub package: Option<Form>,

    /// Unix timestamp the quote is requested at.
    pub requested_at: Option<i64>,
}

impl Request {
    /// Reads a [`Request`] from the JSON file at the provided `path`.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or is not a valid [`Request`].
    pub fn load(path: impl AsRef<str>) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Ad hoc units counted on the quote form, keyed by their [`Selector`].
///
/// Selectors matching nothing count no units.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct AdHocCounts(pub HashMap<String, Decimal>);

impl AdHocUnits for AdHocCounts {
    fn units(&self, _: offering::Id, selector: &Selector) -> Decimal {
        self.0
            .get(selector.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Error of loading a [`Request`].
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// Request file cannot be read.
    #[display("cannot read request: {_0}")]
    Io(io::Error),

    /// Request file is malformed.
    #[display("malformed request: {_0}")]
    Json(serde_json::Error),
}
