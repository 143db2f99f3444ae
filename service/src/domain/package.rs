//! Bar package pricing.

use common::{Currency, Money};
use derive_more::{Display, Error as StdError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use strum::{EnumIter, IntoEnumIterator as _};

use super::{event::Guests, staffing::Brackets};

/// Supplies a customer may provide for the event by themselves.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum Provision {
    /// Liquor.
    Alcohol,

    /// Beer and wine.
    BeerAndWine,

    /// Cocktail mixers.
    Mixers,

    /// Juices.
    Juices,

    /// Soft drinks.
    SoftDrinks,

    /// Cups, straws and napkins.
    Cups,

    /// Ice.
    Ice,
}

/// Answers to "will you provide it yourself" questions of a [`Form`].
///
/// An unanswered question adds no surcharge, only an explicit `false` does.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Provisions {
    /// Whether the customer provides the alcohol.
    pub alcohol: Option<bool>,

    /// Whether the customer provides the beer and wine.
    pub beer_and_wine: Option<bool>,

    /// Whether the customer provides the mixers.
    pub mixers: Option<bool>,

    /// Whether the customer provides the juices.
    pub juices: Option<bool>,

    /// Whether the customer provides the soft drinks.
    pub soft_drinks: Option<bool>,

    /// Whether the customer provides the cups.
    pub cups: Option<bool>,

    /// Whether the customer provides the ice.
    pub ice: Option<bool>,
}

impl Provisions {
    /// Returns the answer given for the provided [`Provision`].
    #[must_use]
    pub const fn get(&self, provision: Provision) -> Option<bool> {
        match provision {
            Provision::Alcohol => self.alcohol,
            Provision::BeerAndWine => self.beer_and_wine,
            Provision::Mixers => self.mixers,
            Provision::Juices => self.juices,
            Provision::SoftDrinks => self.soft_drinks,
            Provision::Cups => self.cups,
            Provision::Ice => self.ice,
        }
    }

    /// Iterates over the [`Provision`]s the customer explicitly won't supply.
    pub fn missing(&self) -> impl Iterator<Item = Provision> + '_ {
        Provision::iter().filter(|p| self.get(*p) == Some(false))
    }
}

/// Open bar package, paid by the host for every guest.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenBar {
    /// Open bar for a limited selection of drinks.
    Partial,

    /// Open bar for the whole menu.
    Full,
}

/// Bar package estimate form.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Form {
    /// Number of guests attending the event.
    pub guests: u32,

    /// Duration of the event, in hours.
    pub hours: Decimal,

    /// Number of rented mobile bars.
    pub bars: u32,

    /// [`Provisions`] the customer supplies.
    pub provisions: Provisions,

    /// [`OpenBar`] package, if any.
    pub open_bar: Option<OpenBar>,

    /// Whether the customer requires glassware instead of disposable cups.
    pub glassware: bool,
}

/// Fees a bar package is priced with.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault,
)]
#[serde(default)]
pub struct Fees {
    /// [`Currency`] of all the fees.
    #[default(Currency::Usd)]
    pub currency: Currency,

    /// Hourly rate of a single bartender.
    #[default(Decimal::from(70))]
    pub bartending_rate: Decimal,

    /// Flat rental fee of a single mobile bar.
    #[default(Decimal::from(150))]
    pub bar_rental: Decimal,

    /// Hourly fee of setting up and breaking down a single mobile bar.
    #[default(Decimal::from(50))]
    pub setup_fee: Decimal,

    /// Hours the crew spends setting up and breaking down a mobile bar.
    #[default(Decimal::from(4))]
    pub setup_hours: Decimal,

    /// Per-guest surcharge for the alcohol.
    #[default(Decimal::from(15))]
    pub alcohol: Decimal,

    /// Per-guest surcharge for the beer and wine.
    pub beer_and_wine: Decimal,

    /// Per-guest surcharge for the mixers.
    #[default(Decimal::from(3))]
    pub mixers: Decimal,

    /// Per-guest surcharge for the juices.
    #[default(Decimal::from(2))]
    pub juices: Decimal,

    /// Per-guest surcharge for the soft drinks.
    #[default(Decimal::new(250, 2))]
    pub soft_drinks: Decimal,

    /// Per-guest surcharge for the cups, straws and napkins.
    #[default(Decimal::from(2))]
    pub cups: Decimal,

    /// Per-guest surcharge for the ice.
    #[default(Decimal::from(2))]
    pub ice: Decimal,

    /// Per-guest fee of an [`OpenBar::Partial`] package.
    pub partial_open_bar: Decimal,

    /// Per-guest fee of an [`OpenBar::Full`] package.
    pub full_open_bar: Decimal,

    /// Per-guest fee of the glassware.
    pub glassware: Decimal,
}

impl Fees {
    /// Returns the per-guest surcharge for the provided [`Provision`].
    #[must_use]
    pub const fn surcharge(&self, provision: Provision) -> Decimal {
        match provision {
            Provision::Alcohol => self.alcohol,
            Provision::BeerAndWine => self.beer_and_wine,
            Provision::Mixers => self.mixers,
            Provision::Juices => self.juices,
            Provision::SoftDrinks => self.soft_drinks,
            Provision::Cups => self.cups,
            Provision::Ice => self.ice,
        }
    }

    /// Returns the per-guest fee of the provided [`OpenBar`] package.
    #[must_use]
    pub const fn open_bar(&self, open_bar: OpenBar) -> Decimal {
        match open_bar {
            OpenBar::Partial => self.partial_open_bar,
            OpenBar::Full => self.full_open_bar,
        }
    }
}

/// Calculates the aggregate cost of the bar rentals and the supplies the
/// customer won't provide.
///
/// Every missing [`Provision`] adds its own surcharge per guest, as do the
/// chosen [`OpenBar`] package and the required glassware.
///
/// # Errors
///
/// With [`Error::Overflow`] if the arithmetic overflows.
pub fn total_cost(form: &Form, fees: &Fees) -> Result<Money, Error> {
    let bars = Decimal::from(form.bars);
    let guests = Decimal::from(form.guests);

    let rentals = mul(bars, fees.bar_rental)?;
    let setup = mul(mul(bars, fees.setup_fee)?, fees.setup_hours)?;
    let per_guest = form
        .provisions
        .missing()
        .map(|p| fees.surcharge(p))
        .chain(form.open_bar.map(|b| fees.open_bar(b)))
        .chain(form.glassware.then_some(fees.glassware))
        .try_fold(Decimal::ZERO, |sum, fee| add(sum, mul(guests, fee)?))?;

    Ok(Money::new(add(add(rentals, setup)?, per_guest)?, fees.currency))
}

/// Calculates the full price of a bar package: bartending labor on top of the
/// [`total_cost`].
///
/// A [`Form`] without guests costs nothing.
///
/// # Errors
///
/// - [`Error::NegativeHours`] if the [`Form`] has negative hours;
/// - [`Error::Overflow`] if the arithmetic overflows.
pub fn price(
    form: &Form,
    fees: &Fees,
    staffing: &Brackets,
) -> Result<Money, Error> {
    if form.hours < Decimal::ZERO {
        return Err(Error::NegativeHours(form.hours));
    }
    let Some(guests) = Guests::new(form.guests) else {
        return Ok(Money::zero(fees.currency));
    };

    let bartenders = Decimal::from(staffing.bartenders_needed(guests));
    let labor = mul(mul(fees.bartending_rate, bartenders)?, form.hours)?;

    Money::new(labor, fees.currency)
        .checked_add(total_cost(form, fees)?)
        .ok_or(Error::Overflow)
}

/// Error of pricing a bar package.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Duration of the event is negative.
    #[display("`hours` cannot be negative: {_0}")]
    NegativeHours(#[error(not(source))] Decimal),

    /// Arithmetic overflowed.
    #[display("arithmetic overflow")]
    Overflow,
}

/// Multiplies the provided [`Decimal`]s reporting an overflow.
fn mul(a: Decimal, b: Decimal) -> Result<Decimal, Error> {
    a.checked_mul(b).ok_or(Error::Overflow)
}

/// Adds the provided [`Decimal`]s reporting an overflow.
fn add(a: Decimal, b: Decimal) -> Result<Decimal, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

#[cfg(test)]
mod spec {
    use common::{Currency, Money};
    use rust_decimal::Decimal;

    use crate::domain::staffing::Brackets;

    use super::{
        price, total_cost, Error, Fees, Form, OpenBar, Provision, Provisions,
    };

    fn usd(s: &str) -> Money {
        Money::new(s.parse().unwrap(), Currency::Usd)
    }

    fn form(
        guests: u32,
        hours: u32,
        bars: u32,
        provisions: Provisions,
    ) -> Form {
        Form {
            guests,
            hours: Decimal::from(hours),
            bars,
            provisions,
            ..Form::default()
        }
    }

    #[test]
    fn rentals_include_setup() {
        let form = form(100, 4, 2, Provisions::default());

        let cost = total_cost(&form, &Fees::default()).unwrap();

        // 2 × 150 + 2 × 50 × 4
        assert_eq!(cost, usd("700"));
    }

    #[test]
    fn sums_every_missing_provision() {
        let provisions = Provisions {
            alcohol: Some(false),
            beer_and_wine: Some(true),
            mixers: Some(false),
            juices: Some(true),
            soft_drinks: Some(false),
            cups: None,
            ice: Some(false),
        };
        assert_eq!(
            provisions.missing().collect::<Vec<_>>(),
            vec![
                Provision::Alcohol,
                Provision::Mixers,
                Provision::SoftDrinks,
                Provision::Ice,
            ],
        );

        let cost = total_cost(&form(10, 4, 0, provisions), &Fees::default())
            .unwrap();

        // 10 × (15 + 3 + 2.50 + 2)
        assert_eq!(cost, usd("225"));
    }

    #[test]
    fn open_bar_and_glassware_charge_per_guest() {
        let fees = Fees {
            beer_and_wine: Decimal::from(6),
            partial_open_bar: Decimal::from(10),
            full_open_bar: Decimal::from(20),
            glassware: Decimal::from(4),
            ..Fees::default()
        };
        let provisions = Provisions {
            beer_and_wine: Some(false),
            ..Provisions::default()
        };
        let mut f = form(10, 4, 0, provisions);
        f.open_bar = Some(OpenBar::Full);
        f.glassware = true;

        let cost = total_cost(&f, &fees).unwrap();

        // 10 × (6 + 20 + 4)
        assert_eq!(cost, usd("300"));

        f.open_bar = Some(OpenBar::Partial);
        f.glassware = false;
        // 10 × (6 + 10)
        assert_eq!(total_cost(&f, &fees).unwrap(), usd("160"));
    }

    #[test]
    fn extra_fees_are_free_by_default() {
        let provisions = Provisions {
            beer_and_wine: Some(false),
            ..Provisions::default()
        };
        let mut f = form(10, 4, 0, provisions);
        f.open_bar = Some(OpenBar::Full);
        f.glassware = true;

        let cost = total_cost(&f, &Fees::default()).unwrap();

        assert_eq!(cost, Money::zero(Currency::Usd));
    }

    #[test]
    fn unanswered_provisions_add_nothing() {
        let form = form(50, 4, 0, Provisions::default());

        let cost = total_cost(&form, &Fees::default()).unwrap();

        assert_eq!(cost, Money::zero(Currency::Usd));
    }

    #[test]
    fn price_adds_bartending_labor() {
        let provisions = Provisions {
            ice: Some(false),
            ..Provisions::default()
        };

        let total = price(
            &form(90, 5, 1, provisions),
            &Fees::default(),
            &Brackets::default(),
        )
        .unwrap();

        // 3 bartenders × 70 × 5 + 150 + 50 × 4 + 90 × 2
        assert_eq!(total, usd("1580"));
    }

    #[test]
    fn price_without_guests_is_zero() {
        let total = price(
            &form(0, 5, 3, Provisions::default()),
            &Fees::default(),
            &Brackets::default(),
        )
        .unwrap();

        assert_eq!(total, Money::zero(Currency::Usd));
    }

    #[test]
    fn price_rejects_negative_hours() {
        let mut f = form(10, 0, 0, Provisions::default());
        f.hours = Decimal::NEGATIVE_ONE;

        assert_eq!(
            price(&f, &Fees::default(), &Brackets::default()),
            Err(Error::NegativeHours(Decimal::NEGATIVE_ONE)),
        );
    }
}
