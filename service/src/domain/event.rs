//! Definitions describing a catered event being quoted.

use derive_more::{Display, Into};
use rust_decimal::Decimal;

/// Number of guests attending an event.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Guests(u32);

impl Guests {
    /// Creates new [`Guests`] if the provided `count` is positive.
    #[must_use]
    pub const fn new(count: u32) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(Self(count))
        }
    }

    /// Parses [`Guests`] out of a raw [`Decimal`] form value.
    ///
    /// [`None`] is returned unless the value is a positive integer.
    #[must_use]
    pub fn from_decimal(val: Decimal) -> Option<Self> {
        if !val.is_integer() {
            return None;
        }
        u32::try_from(val).ok().and_then(Self::new)
    }

    /// Returns the number of guests as a [`u32`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the number of guests as a [`Decimal`].
    #[must_use]
    pub fn decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

/// Positive duration of an event, in hours.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Hours(Decimal);

impl Hours {
    /// Creates new [`Hours`] if the provided `hours` are positive.
    #[must_use]
    pub fn new(hours: Decimal) -> Option<Self> {
        (hours > Decimal::ZERO).then_some(Self(hours))
    }

    /// Returns the [`Decimal`] number of these [`Hours`].
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::{Guests, Hours};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn guests_are_positive_integers() {
        let guests = |s| Guests::from_decimal(decimal(s)).map(Guests::get);

        assert_eq!(guests("95"), Some(95));
        assert_eq!(guests("95.0"), Some(95));
        assert!(Guests::from_decimal(decimal("9.5")).is_none());
        assert!(Guests::from_decimal(Decimal::ZERO).is_none());
        assert!(Guests::from_decimal(decimal("-3")).is_none());
        assert!(Guests::new(0).is_none());
    }

    #[test]
    fn hours_are_positive() {
        assert!(Hours::new(decimal("0.5")).is_some());
        assert!(Hours::new(Decimal::ZERO).is_none());
        assert!(Hours::new(decimal("-1")).is_none());
    }
}
