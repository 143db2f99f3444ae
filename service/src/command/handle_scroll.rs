//! [`Command`] for toggling the floating header on scroll.

use common::operations::{Hide, Show};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::site::{self, Element, Scroll, Visibility},
    infra::{page, Page},
    Service,
};

use super::Command;

/// [`Command`] for toggling the [`Element::FloatingHeader`] according to the
/// current [`Scroll`] position.
///
/// Returns the applied [`Visibility`], or [`None`] if the page has no
/// floating header.
#[derive(Clone, Copy, Debug, From)]
pub struct HandleScroll(pub Scroll);

impl<P> Command<HandleScroll> for Service<P>
where
    P: Page<Show<Element>, Ok = bool, Err = Traced<page::Error>>
        + Page<Hide<Element>, Ok = bool, Err = Traced<page::Error>>,
{
    type Ok = Option<Visibility>;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        HandleScroll(scroll): HandleScroll,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let visibility =
            site::header_visibility(&scroll, self.config().header_threshold);

        let header = Element::FloatingHeader;
        let toggled = match visibility {
            Visibility::Shown => self.page().execute(Show(header)),
            Visibility::Hidden => self.page().execute(Hide(header)),
        }
        .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(toggled.then_some(visibility))
    }
}

/// Error of [`HandleScroll`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Page`] error.
    #[display("`Page` operation failed: {_0}")]
    Page(page::Error),
}

#[cfg(test)]
mod spec {
    use common::Handler as _;
    use rust_decimal::Decimal;

    use crate::{
        domain::site::{Element, Scroll, Visibility},
        infra::Memory,
        Config, Service,
    };

    use super::HandleScroll;

    fn scrolled(top: u32) -> HandleScroll {
        HandleScroll(Scroll {
            top: Decimal::from(top),
            height: Decimal::from(1_200),
            client_height: Decimal::from(200),
        })
    }

    #[test]
    fn toggles_header() {
        let svc = Service::new(
            Config::default(),
            Memory::new()
                .with_element(Element::FloatingHeader, Visibility::Hidden),
        );

        let applied = svc.execute(scrolled(60)).unwrap();
        assert_eq!(applied, Some(Visibility::Shown));
        assert_eq!(
            svc.page().visibility(Element::FloatingHeader),
            Some(Visibility::Shown),
        );

        let applied = svc.execute(scrolled(0)).unwrap();
        assert_eq!(applied, Some(Visibility::Hidden));
        assert_eq!(
            svc.page().visibility(Element::FloatingHeader),
            Some(Visibility::Hidden),
        );
    }

    #[test]
    fn noop_without_header() {
        let svc = Service::new(Config::default(), Memory::new());

        assert_eq!(svc.execute(scrolled(600)).unwrap(), None);
        assert_eq!(svc.page().visibility(Element::FloatingHeader), None);
    }
}
