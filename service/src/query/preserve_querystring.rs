//! [`Query`] for preserving the querystring across site links.

use std::convert::Infallible;

use url::Url;

use crate::{domain::site, Service};

use super::Query;

/// [`Query`] for the rewritten target of a `link` on the current `page`.
///
/// Returns [`None`] if the `link` should stay untouched.
#[derive(Clone, Copy, Debug)]
pub struct PreserveQuerystring<'a> {
    /// URL of the current page.
    pub page: &'a Url,

    /// Target of the link being followed.
    pub link: &'a Url,
}

impl<P> Query<PreserveQuerystring<'_>> for Service<P> {
    type Ok = Option<Url>;
    type Err = Infallible;

    fn execute(
        &self,
        query: PreserveQuerystring<'_>,
    ) -> Result<Self::Ok, Self::Err> {
        let PreserveQuerystring { page, link } = query;
        Ok(site::merge_querystring(
            page,
            link,
            &self.config().excluded_path,
        ))
    }
}
