//! [`Query`] for totaling a quote.

use common::Money;
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{domain::quote, Service};

use super::Query;

/// [`Query`] for the total of the stored [`quote::Priced`] lines, rounded to
/// whole cents.
#[derive(Clone, Copy, Debug)]
pub struct QuoteTotal<'a>(pub &'a [quote::Priced]);

impl<P> Query<QuoteTotal<'_>> for Service<P> {
    type Ok = Money;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        QuoteTotal(lines): QuoteTotal<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        quote::total(lines, self.config().currency)
            .map(Money::round_to_cents)
            .ok_or(ExecutionError::Overflow)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`QuoteTotal`] [`Query`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Total doesn't fit into a [`Money`] amount.
    #[display("quote total overflowed")]
    Overflow,
}
