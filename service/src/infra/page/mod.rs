//! [`Page`]-related definitions.
//!
//! Every integration of the site scripts with the hosting page (elements,
//! form fields, local storage, analytics collectors) goes through a [`Page`],
//! so the domain logic never reaches for globals. Operations on elements,
//! fields or collectors the page lacks are no-ops reported as `false`, while
//! an unavailable local storage fails with [`Error::Storage`].

pub mod memory;

use derive_more::{Display, Error as StdError};

use crate::domain::site::{Collector, ConversionEvent, Field};

pub use self::memory::Memory;

/// Page operation.
pub use common::Handler as Page;

/// Value written into a page [`Field`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Written {
    /// [`Field`] to write into.
    pub field: Field,

    /// Value to write.
    pub value: String,
}

/// Value persisted in the page local storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stored {
    /// Key the value is stored under.
    pub key: &'static str,

    /// Serialized value.
    pub value: String,
}

/// [`ConversionEvent`] tracked by an analytics [`Collector`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tracked {
    /// [`Collector`] to receive the event.
    pub collector: Collector,

    /// Tracked [`ConversionEvent`].
    pub event: ConversionEvent,
}

/// [`Page`] error.
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// Local storage is unavailable or rejected the operation.
    #[display("`Storage` operation failed: {_0}")]
    Storage(#[error(not(source))] String),
}
