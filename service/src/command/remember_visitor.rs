//! [`Command`] for remembering how a [`Visitor`] landed on the site.

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::site::Visitor,
    infra::{
        page::{self, Stored},
        Page,
    },
    Service,
};

use super::Command;

/// [`Command`] for persisting the first-visit [`Visitor`] record.
///
/// An already stored record is never overwritten. Returns whether the record
/// has been written.
#[derive(Clone, Debug, From)]
pub struct RememberVisitor(pub Visitor);

impl<P> Command<RememberVisitor> for Service<P>
where
    P: Page<
            Select<By<Option<String>, &'static str>>,
            Ok = Option<String>,
            Err = Traced<page::Error>,
        > + Page<Insert<Stored>, Ok = (), Err = Traced<page::Error>>,
{
    type Ok = bool;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        RememberVisitor(visitor): RememberVisitor,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let stored = self
            .page()
            .execute(Select(By::<Option<String>, _>::new(Visitor::KEY)))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if stored.is_some() {
            return Ok(false);
        }

        let value = serde_json::to_string(&visitor)
            .map_err(E::Serialization)
            .map_err(tracerr::wrap!())?;
        self.page()
            .execute(Insert(Stored {
                key: Visitor::KEY,
                value,
            }))
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::debug!(
            landing_page = ?visitor.landing_page,
            referrer = ?visitor.referrer,
            "visitor remembered",
        );
        Ok(true)
    }
}

/// Error of [`RememberVisitor`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Page`] error.
    #[display("`Page` operation failed: {_0}")]
    #[from]
    Page(page::Error),

    /// [`Visitor`] failed to serialize.
    #[display("failed to serialize `Visitor`: {_0}")]
    Serialization(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{domain::site::Visitor, infra::Memory, Config, Service};

    use super::RememberVisitor;

    fn visitor(landing_page: &str) -> RememberVisitor {
        RememberVisitor(Visitor {
            landing_page: Some(landing_page.to_owned()),
            referrer: Some("https://google.com/".to_owned()),
        })
    }

    #[test]
    fn writes_once() {
        let svc = Service::new(Config::default(), Memory::new());

        assert!(svc.execute(visitor("https://example.com/?gclid=1")).unwrap());
        assert!(!svc.execute(visitor("https://example.com/faq")).unwrap());

        let stored: Visitor =
            serde_json::from_str(&svc.page().stored("user").unwrap()).unwrap();
        assert_eq!(
            stored.landing_page.as_deref(),
            Some("https://example.com/?gclid=1"),
        );
        assert_eq!(stored.referrer.as_deref(), Some("https://google.com/"));
    }

    #[test]
    fn stores_absent_values_as_null() {
        let svc = Service::new(Config::default(), Memory::new());

        assert!(svc.execute(RememberVisitor(Visitor::default())).unwrap());

        assert_eq!(
            svc.page().stored("user").as_deref(),
            Some(r#"{"landingPage":null,"referrer":null}"#),
        );
    }

    #[test]
    fn fails_without_storage() {
        let svc = Service::new(Config::default(), Memory::without_storage());

        assert!(svc.execute(visitor("https://example.com/")).is_err());
    }
}
