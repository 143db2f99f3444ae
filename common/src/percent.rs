//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage in the `[0, 100]` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is
    /// not less than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Creates a new [`Percent`] saturating the provided value into the
    /// `[0, 100]` range.
    #[must_use]
    pub fn saturating(val: Decimal) -> Self {
        Self(val.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Calculates which [`Percent`] the `part` makes of the `whole`.
    ///
    /// The result is saturated into the `[0, 100]` range. [`None`] is returned
    /// if the `whole` is not positive, as there is nothing to take a share of,
    /// or if the ratio overflows.
    #[must_use]
    pub fn of(part: Decimal, whole: Decimal) -> Option<Self> {
        if whole <= Decimal::ZERO {
            return None;
        }
        let ratio = part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)?;
        Some(Self::saturating(ratio))
    }

    /// Returns the [`Decimal`] value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Serialize::serialize(&self.0, serializer)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let val = <Decimal as Deserialize<'de>>::deserialize(deserializer)?;
            Self::new(val).ok_or_else(|| {
                de::Error::custom(format!(
                    "`Percent` must be in `[0, 100]` range, got: {val}",
                ))
            })
        }
    }
}
