//! [`Command`] for opening the quote request form.

use common::operations::{Hide, Show, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::site::{Element, Field},
    infra::{
        page::{self, Written},
        Page,
    },
    Service,
};

use super::Command;

/// [`Command`] for opening the [`Element::QuoteForm`] by the clicked control.
///
/// Shows the form, records the control name in the [`Field::ButtonClicked`]
/// and hides the [`Element::PopUp`]. Every step missing on the page is
/// skipped.
#[derive(Clone, Debug, From)]
pub struct OpenQuoteForm {
    /// Name of the control which opened the form.
    pub button: String,
}

impl<P> Command<OpenQuoteForm> for Service<P>
where
    P: Page<Show<Element>, Ok = bool, Err = Traced<page::Error>>
        + Page<Hide<Element>, Ok = bool, Err = Traced<page::Error>>
        + Page<Update<Written>, Ok = bool, Err = Traced<page::Error>>,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: OpenQuoteForm) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let OpenQuoteForm { button } = cmd;

        self.page()
            .execute(Show(Element::QuoteForm))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        self.page()
            .execute(Update(Written {
                field: Field::ButtonClicked,
                value: button,
            }))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        self.page()
            .execute(Hide(Element::PopUp))
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)
    }
}

/// Error of [`OpenQuoteForm`] [`Command`] execution.
#[derive(Clone, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Page`] error.
    #[display("`Page` operation failed: {_0}")]
    Page(page::Error),
}
