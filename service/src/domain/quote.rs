//! Quote [`Line`] estimation.
//!
//! [`estimate`] is a pure function: it neither logs nor touches the page.
//! Reporting failures is left to the caller.

use common::{Currency, Money};
use derive_more::{Display, Error as StdError, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    event::{Guests, Hours},
    offering::{self, Configuration, InvalidAttributes, UnitType},
};

/// Variable inputs shared by every line item of a single quote.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Context {
    /// Number of guests attending the event.
    pub guests: Guests,

    /// Duration of the event.
    pub hours: Hours,

    /// Duration the suggested prices were calibrated against.
    pub assumed_base_hours: Hours,
}

impl Context {
    /// Validates raw form values into a [`Context`].
    ///
    /// The values are checked in order (guests, hours, assumed base hours),
    /// stopping on the first invalid one.
    ///
    /// # Errors
    ///
    /// With the [`Error`] naming the first missing or invalid value.
    pub fn new(
        guests: Option<Decimal>,
        hours: Option<Decimal>,
        assumed_base_hours: Option<Decimal>,
    ) -> Result<Self, Error> {
        let guests = guests
            .and_then(Guests::from_decimal)
            .ok_or(Error::InvalidGuests(guests))?;
        let hours =
            hours.and_then(Hours::new).ok_or(Error::InvalidHours(hours))?;
        let assumed_base_hours = assumed_base_hours
            .and_then(Hours::new)
            .ok_or(Error::InvalidAssumedBaseHours(assumed_base_hours))?;

        Ok(Self {
            guests,
            hours,
            assumed_base_hours,
        })
    }
}

/// Estimated quote line item.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Line {
    /// Price of a single unit, adjusted to the event duration.
    pub adjusted_price: Decimal,

    /// Number of billable units.
    pub units: Decimal,
}

impl Line {
    /// Returns the price of all the units of this [`Line`].
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.adjusted_price * self.units
    }
}

/// Resolver of units which cannot be derived from guests and hours alone.
pub trait AdHocUnits {
    /// Resolves the number of units of the service with the provided `id`,
    /// inspecting the page controls matched by the `selector`.
    fn units(&self, id: offering::Id, selector: &offering::Selector) -> Decimal;
}

impl<F> AdHocUnits for F
where
    F: Fn(offering::Id, &offering::Selector) -> Decimal,
{
    fn units(
        &self,
        id: offering::Id,
        selector: &offering::Selector,
    ) -> Decimal {
        self(id, selector)
    }
}

/// Estimates the quote [`Line`] of the service described by the provided
/// [`Configuration`].
///
/// # Errors
///
/// - [`Error::UnknownUnitType`] if the unit type matches no [`UnitType`];
/// - [`Error::ResolverRequired`] if an [`UnitType::AdHoc`] service is
///   estimated without an [`AdHocUnits`] resolver;
/// - [`Error::Overflow`] if the arithmetic overflows.
pub fn estimate(
    config: &Configuration,
    ctx: &Context,
    resolver: Option<&dyn AdHocUnits>,
) -> Result<Line, Error> {
    let Context {
        guests,
        hours,
        assumed_base_hours,
    } = *ctx;
    let unit_type = config.unit_type.resolve()?;

    let mut adjusted_price = config.suggested_price;
    let units = match unit_type {
        UnitType::PerPerson => {
            let scale = hours
                .get()
                .checked_div(assumed_base_hours.get())
                .ok_or(Error::Overflow)?;
            adjusted_price =
                adjusted_price.checked_mul(scale).ok_or(Error::Overflow)?;
            guests.decimal()
        }
        UnitType::Hourly => hours.get(),
        UnitType::Ratio => {
            let mut units = if config.guest_ratio > Decimal::ZERO {
                guests
                    .decimal()
                    .checked_div(config.guest_ratio)
                    .ok_or(Error::Overflow)?
                    .ceil()
            } else {
                Decimal::ZERO
            };
            if config.kind == offering::Kind::HOURLY {
                units = units.checked_mul(hours.get()).ok_or(Error::Overflow)?;
            }
            units
        }
        UnitType::AdHoc => resolver
            .ok_or(Error::ResolverRequired(config.id))?
            .units(config.id, &config.selector),
        UnitType::Fixed => Decimal::ONE,
    };

    Ok(Line {
        adjusted_price,
        units,
    })
}

/// Error of estimating a quote [`Line`].
#[derive(Clone, Debug, Display, Eq, From, PartialEq, StdError)]
pub enum Error {
    /// Service configuration is absent.
    #[display("service configuration is missing")]
    MissingConfiguration,

    /// Service configuration has invalid attributes.
    #[display("{_0}")]
    #[from]
    InvalidAttributes(InvalidAttributes),

    /// Number of guests is missing or is not a positive integer.
    #[display("`guests` is missing or invalid: {_0:?}")]
    InvalidGuests(#[error(not(source))] Option<Decimal>),

    /// Event duration is missing or is not positive.
    #[display("`hours` is missing or invalid: {_0:?}")]
    InvalidHours(#[error(not(source))] Option<Decimal>),

    /// Assumed base duration is missing or is not positive.
    #[display("`assumed_base_hours` is missing, invalid, or zero: {_0:?}")]
    InvalidAssumedBaseHours(#[error(not(source))] Option<Decimal>),

    /// Unit type identifier matches no [`UnitType`].
    #[display("{_0}")]
    #[from]
    UnknownUnitType(common::UnknownKind),

    /// [`UnitType::AdHoc`] service requires an [`AdHocUnits`] resolver.
    #[display("ad hoc units resolver required for service `{_0}`")]
    ResolverRequired(#[error(not(source))] offering::Id),

    /// Arithmetic overflowed.
    #[display("arithmetic overflow")]
    Overflow,
}

impl Error {
    /// Returns names of the inputs this [`Error`] is caused by.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::MissingConfiguration => vec!["configuration"],
            Self::InvalidAttributes(e) => e.fields.clone(),
            Self::InvalidGuests(_) => vec!["guests"],
            Self::InvalidHours(_) => vec!["hours"],
            Self::InvalidAssumedBaseHours(_) => vec!["assumed_base_hours"],
            Self::UnknownUnitType(_) => vec![Configuration::UNIT_TYPE],
            Self::ResolverRequired(_) => vec!["ad_hoc_resolver"],
            Self::Overflow => vec![],
        }
    }
}

/// Quote line item stored with its final units and price.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Priced {
    /// ID of the quoted service.
    pub service_id: offering::Id,

    /// Number of billable units.
    pub units: Decimal,

    /// Price of a single unit.
    pub price_per_unit: Decimal,
}

impl Priced {
    /// Creates a new [`Priced`] line out of an estimated [`Line`].
    #[must_use]
    pub fn new(service_id: offering::Id, line: Line) -> Self {
        Self {
            service_id,
            units: line.units,
            price_per_unit: line.adjusted_price,
        }
    }
}

/// Sums `units × price_per_unit` over all the provided [`Priced`] lines.
///
/// [`None`] is returned on overflow.
#[must_use]
pub fn total<'a>(
    lines: impl IntoIterator<Item = &'a Priced>,
    currency: Currency,
) -> Option<Money> {
    lines
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, l| {
            sum.checked_add(l.units.checked_mul(l.price_per_unit)?)
        })
        .map(|amount| Money::new(amount, currency))
}
