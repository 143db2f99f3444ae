//! [`Summary`] of a quoted [`Request`].

use common::{DateTime, Handler as _, Money};
use derive_more::{Display, Error as StdError};
use serde::Serialize;
use service::{
    domain::{package, quote::Priced},
    query::{self, EstimateLine, PackagePrice, QuoteTotal, TotalCost},
};
use tracerr::Traced;
use tracing as log;

use crate::{Request, Service};

/// Summary of a quoted [`Request`].
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    /// Time the quote is requested at, in the `America/New_York` local time.
    pub requested_at: String,

    /// Estimated quote lines.
    pub lines: Vec<Priced>,

    /// Services which couldn't be quoted.
    pub skipped: Vec<Skipped>,

    /// Total of all the estimated [`Summary::lines`].
    pub total: Money,

    /// Bar package pricing, if requested.
    pub package: Option<Package>,
}

/// Service of a [`Request`] which couldn't be quoted.
#[derive(Clone, Debug, Serialize)]
pub struct Skipped {
    /// Position of the service in the [`Request`].
    pub index: usize,

    /// Inputs causing the failure.
    pub fields: Vec<&'static str>,

    /// Human-readable failure reason.
    pub reason: String,
}

/// Bar package pricing.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Package {
    /// Cost of the bar rentals and the supplies.
    pub total_cost: Money,

    /// Full price, including the bartending labor.
    pub price: Money,
}

/// Quotes the provided [`Request`] with the [`Service`].
///
/// Services which cannot be quoted are reported in [`Summary::skipped`]
/// without failing the whole [`Request`].
///
/// # Errors
///
/// If the [`Request`] timestamp is out of range, or the total or the bar
/// package cannot be priced.
pub fn quote(svc: &Service, req: &Request) -> Result<Summary, Error> {
    let requested_at = match req.requested_at {
        Some(ts) => DateTime::from_unix_timestamp(ts)
            .and_then(|dt| dt.to_eastern_minutes())
            .ok_or(Error::InvalidTimestamp(ts))?,
        None => DateTime::now()
            .to_eastern_minutes()
            .ok_or(Error::InvalidClock)?,
    };

    let mut lines = vec![];
    let mut skipped = vec![];
    for (index, attrs) in req.services.iter().enumerate() {
        let estimated = svc.execute(EstimateLine {
            attributes: Some(attrs),
            guests: req.guests,
            hours: req.hours,
            assumed_base_hours: req.assumed_base_hours,
            resolver: Some(&req.ad_hoc_units),
        });
        match estimated {
            Ok(priced) => lines.push(priced),
            Err(e) => {
                let e = e.as_ref();
                log::info!("skipping service #{index}: {e}");
                skipped.push(Skipped {
                    index,
                    fields: e.fields(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let total = svc.execute(QuoteTotal(&lines)).map_err(Error::Total)?;

    let package = req
        .package
        .map(|form| {
            Ok::<_, Error>(Package {
                total_cost: svc
                    .execute(TotalCost(form))
                    .map_err(Error::Package)?,
                price: svc.execute(PackagePrice(form)).map_err(Error::Package)?,
            })
        })
        .transpose()?;

    Ok(Summary {
        requested_at,
        lines,
        skipped,
        total,
        package,
    })
}

/// Error of quoting a [`Request`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// [`Request`] timestamp is out of range.
    #[display("`requested_at` is out of range: {_0}")]
    InvalidTimestamp(#[error(not(source))] i64),

    /// System clock reports a time out of the supported range.
    #[display("system clock is out of range")]
    InvalidClock,

    /// Quote total cannot be calculated.
    #[display("cannot total quote: {_0}")]
    Total(#[error(not(source))] Traced<query::quote_total::ExecutionError>),

    /// Bar package cannot be priced.
    #[display("cannot price bar package: {_0}")]
    Package(#[error(not(source))] Traced<package::Error>),
}
