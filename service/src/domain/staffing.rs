//! Staffing level lookup.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::event::Guests;

/// Guest brackets determining how many bartenders an event requires.
///
/// Each bound is the inclusive upper limit of a bracket: guests above every
/// bound fall into an extra bracket past the last one. Bounds are strictly
/// ascending, so the number of bartenders never decreases as guests grow.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Brackets(Vec<u32>);

impl Brackets {
    /// Creates new [`Brackets`] out of the provided upper `bounds`.
    ///
    /// # Errors
    ///
    /// With [`UnorderedBounds`] if the `bounds` are not strictly ascending.
    pub fn new(bounds: Vec<u32>) -> Result<Self, UnorderedBounds> {
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(UnorderedBounds(bounds));
        }
        Ok(Self(bounds))
    }

    /// Returns the number of bartenders required to serve the `guests`.
    #[must_use]
    pub fn bartenders_needed(&self, guests: Guests) -> u32 {
        let exceeded = self.0.partition_point(|&bound| bound < guests.get());
        u32::try_from(exceeded).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}

impl Default for Brackets {
    /// Up to 50 guests for one bartender, 80 for two, 120 for three, and four
    /// above that.
    fn default() -> Self {
        Self(vec![50, 80, 120])
    }
}

impl TryFrom<Vec<u32>> for Brackets {
    type Error = UnorderedBounds;

    fn try_from(bounds: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(bounds)
    }
}

impl From<Brackets> for Vec<u32> {
    fn from(brackets: Brackets) -> Self {
        brackets.0
    }
}

/// Error of creating [`Brackets`] out of bounds which are not strictly
/// ascending.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("staffing bounds must be strictly ascending, got: {_0:?}")]
pub struct UnorderedBounds(#[error(not(source))] pub Vec<u32>);
