//! [`Query`] collection related to a bar package.

use common::Money;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::package::{self, Form},
    Service,
};

use super::Query;

/// [`Query`] for the aggregate cost of the bar rentals and the supplies the
/// customer won't provide.
#[derive(Clone, Copy, Debug)]
pub struct TotalCost(pub Form);

impl<P> Query<TotalCost> for Service<P> {
    type Ok = Money;
    type Err = Traced<package::Error>;

    fn execute(
        &self,
        TotalCost(form): TotalCost,
    ) -> Result<Self::Ok, Self::Err> {
        package::total_cost(&form, &self.config().fees).map_err(|e| {
            log::warn!("cannot calculate bar package cost: {e}");
            tracerr::new!(e)
        })
    }
}

/// [`Query`] for the full price of a bar package, including the bartending
/// labor.
#[derive(Clone, Copy, Debug)]
pub struct PackagePrice(pub Form);

impl<P> Query<PackagePrice> for Service<P> {
    type Ok = Money;
    type Err = Traced<package::Error>;

    fn execute(
        &self,
        PackagePrice(form): PackagePrice,
    ) -> Result<Self::Ok, Self::Err> {
        let config = self.config();
        package::price(&form, &config.fees, &config.staffing).map_err(|e| {
            log::warn!("cannot price bar package: {e}");
            tracerr::new!(e)
        })
    }
}
