//! [`Query`] definition.

pub mod estimate_line;
pub mod package;
pub mod preserve_querystring;
pub mod quote_total;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    estimate_line::EstimateLine,
    package::{PackagePrice, TotalCost},
    preserve_querystring::PreserveQuerystring,
    quote_total::QuoteTotal,
};
