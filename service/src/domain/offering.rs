//! Sellable service [`Configuration`] definitions.

use std::{collections::BTreeMap, str::FromStr};

use common::define_kind;
use derive_more::{Display, Error, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw markup attributes of a quote form line item, keyed by their names
/// without the `data-` prefix (`service-id`, `suggested-price`, etc).
pub type Attributes = BTreeMap<String, String>;

/// Configuration of a single sellable service line item on a quote form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Configuration {
    /// ID of the service.
    pub id: Id,

    /// Price suggested for a single unit of the service.
    pub suggested_price: Decimal,

    /// Raw [`UnitType`] identifier, resolved when the units are calculated.
    pub unit_type: UnitTypeId,

    /// [`Kind`] of the service.
    pub kind: Kind,

    /// Number of guests a single unit serves, used by [`UnitType::Ratio`].
    pub guest_ratio: Decimal,

    /// [`Selector`] passed to an ad hoc units resolver.
    pub selector: Selector,
}

impl Configuration {
    /// Attribute holding the [`Id`].
    pub const ID: &'static str = "service-id";

    /// Attribute holding the suggested price.
    pub const SUGGESTED_PRICE: &'static str = "suggested-price";

    /// Attribute holding the [`UnitTypeId`].
    pub const UNIT_TYPE: &'static str = "unit-type-id";

    /// Attribute holding the [`Kind`].
    pub const KIND: &'static str = "service-type-id";

    /// Attribute holding the guest ratio.
    pub const GUEST_RATIO: &'static str = "guest-ratio";

    /// Attribute holding the [`Selector`].
    pub const SELECTOR: &'static str = "selector";

    /// Parses a [`Configuration`] out of the provided [`Attributes`].
    ///
    /// All five numeric attributes are checked together, so the returned
    /// [`InvalidAttributes`] lists every one of them that is missing or
    /// malformed. A missing [`Selector`] defaults to an empty one.
    ///
    /// # Errors
    ///
    /// With [`InvalidAttributes`] if any numeric attribute is invalid.
    pub fn from_attributes(
        attrs: &Attributes,
    ) -> Result<Self, InvalidAttributes> {
        let get = |name: &str| attrs.get(name).map(|v| v.trim());

        let id = get(Self::ID).and_then(|v| v.parse().ok());
        let suggested_price = get(Self::SUGGESTED_PRICE)
            .and_then(|v| Decimal::from_str(v).ok())
            .filter(|p| !p.is_sign_negative());
        let unit_type = get(Self::UNIT_TYPE).and_then(|v| v.parse().ok());
        let kind = get(Self::KIND).and_then(|v| v.parse().ok());
        let guest_ratio =
            get(Self::GUEST_RATIO).and_then(|v| Decimal::from_str(v).ok());

        match (id, suggested_price, unit_type, kind, guest_ratio) {
            (
                Some(id),
                Some(suggested_price),
                Some(unit_type),
                Some(kind),
                Some(guest_ratio),
            ) => Ok(Self {
                id,
                suggested_price,
                unit_type,
                kind,
                guest_ratio,
                selector: Selector(
                    get(Self::SELECTOR).unwrap_or_default().to_owned(),
                ),
            }),
            (id, price, unit_type, kind, ratio) => {
                let fields = [
                    (Self::ID, id.is_none()),
                    (Self::SUGGESTED_PRICE, price.is_none()),
                    (Self::UNIT_TYPE, unit_type.is_none()),
                    (Self::KIND, kind.is_none()),
                    (Self::GUEST_RATIO, ratio.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, invalid)| invalid.then_some(name))
                .collect();
                Err(InvalidAttributes { fields })
            }
        }
    }
}

/// Error of parsing a [`Configuration`] with missing or malformed attributes.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("missing or invalid attributes: {}", fields.join(", "))]
pub struct InvalidAttributes {
    /// Names of the offending attributes, in their declaration order.
    pub fields: Vec<&'static str>,
}

/// ID of a service.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(try_from = "u32")]
pub struct Id(u32);

impl Id {
    /// Creates a new [`Id`] if the provided `id` is positive.
    #[must_use]
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }
}

impl TryFrom<u32> for Id {
    type Error = &'static str;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id).ok_or("`Id` must be positive")
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map_err(|_| "invalid `Id`")
            .and_then(Self::try_from)
    }
}

/// Kind of a service, classifying it for pricing purposes.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, PartialEq)]
pub struct Kind(i64);

impl Kind {
    /// Kind of services whose ratio-based units are billed per hour, like
    /// bartenders staffed for the whole shift.
    pub const HOURLY: Self = Self(5);
}

impl FromStr for Kind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| "invalid `Kind`")
    }
}

/// Raw identifier of a [`UnitType`], which may match none of its variants.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, PartialEq)]
pub struct UnitTypeId(i64);

impl UnitTypeId {
    /// Resolves this identifier into a [`UnitType`].
    ///
    /// # Errors
    ///
    /// With [`common::UnknownKind`] if no [`UnitType`] has this identifier.
    pub fn resolve(self) -> Result<UnitType, common::UnknownKind> {
        UnitType::try_from(self.0)
    }
}

impl From<UnitType> for UnitTypeId {
    fn from(ty: UnitType) -> Self {
        Self(i64::from(ty.u8()))
    }
}

impl FromStr for UnitTypeId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| "invalid `UnitTypeId`")
    }
}

define_kind! {
    #[doc = "Pricing model governing how the billable units of a service are \
             calculated."]
    enum UnitType {
        #[doc = "Billed per guest, priced for the assumed base duration."]
        PerPerson = 1,

        #[doc = "Billed per hour."]
        Hourly = 2,

        #[doc = "Billed per group of guests served by a single unit."]
        Ratio = 4,

        #[doc = "Billed per units resolved by a custom lookup."]
        AdHoc = 5,

        #[doc = "Billed once."]
        Fixed = 6,
    }
}

/// Selector identifying the page controls an ad hoc units resolver inspects.
#[derive(Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
pub struct Selector(String);

impl Selector {
    /// Creates a new [`Selector`].
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Returns this [`Selector`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{
        Attributes, Configuration, Id, InvalidAttributes, Kind, UnitType,
        UnitTypeId,
    };

    fn attributes(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn parses_attributes() {
        let cfg = Configuration::from_attributes(&attributes(&[
            ("service-id", "7"),
            ("suggested-price", "25.50"),
            ("unit-type-id", "4"),
            ("service-type-id", "5"),
            ("guest-ratio", "50"),
            ("selector", ".barCount"),
        ]))
        .unwrap();

        assert_eq!(cfg.id, Id::new(7).unwrap());
        assert_eq!(cfg.suggested_price, "25.50".parse::<Decimal>().unwrap());
        assert_eq!(cfg.unit_type.resolve(), Ok(UnitType::Ratio));
        assert_eq!(cfg.kind, Kind::HOURLY);
        assert_eq!(cfg.guest_ratio, Decimal::from(50));
        assert_eq!(cfg.selector.as_str(), ".barCount");
    }

    #[test]
    fn defaults_selector_to_empty() {
        let cfg = Configuration::from_attributes(&attributes(&[
            ("service-id", "1"),
            ("suggested-price", "0"),
            ("unit-type-id", "6"),
            ("service-type-id", "1"),
            ("guest-ratio", "0"),
        ]))
        .unwrap();

        assert_eq!(cfg.selector.as_str(), "");
    }

    #[test]
    fn reports_every_invalid_attribute() {
        let err = Configuration::from_attributes(&attributes(&[
            ("service-id", "0"),
            ("suggested-price", "-1"),
            ("unit-type-id", "2"),
            ("service-type-id", "five"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            InvalidAttributes {
                fields: vec![
                    "service-id",
                    "suggested-price",
                    "service-type-id",
                    "guest-ratio",
                ],
            },
        );
        assert_eq!(
            err.to_string(),
            "missing or invalid attributes: service-id, suggested-price, \
             service-type-id, guest-ratio",
        );
    }

    #[test]
    fn keeps_unknown_unit_type_unresolved() {
        let cfg = Configuration::from_attributes(&attributes(&[
            ("service-id", "3"),
            ("suggested-price", "10"),
            ("unit-type-id", "3"),
            ("service-type-id", "1"),
            ("guest-ratio", "1"),
        ]))
        .unwrap();

        assert_eq!(cfg.unit_type, UnitTypeId::from(3_i64));
        assert!(cfg.unit_type.resolve().is_err());
        assert_eq!(
            UnitTypeId::from(UnitType::AdHoc).resolve(),
            Ok(UnitType::AdHoc),
        );
    }
}
