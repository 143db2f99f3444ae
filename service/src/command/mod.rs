//! [`Command`] definition.

pub mod handle_scroll;
pub mod open_quote_form;
pub mod remember_visitor;
pub mod track_phone_call;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    handle_scroll::HandleScroll, open_quote_form::OpenQuoteForm,
    remember_visitor::RememberVisitor, track_phone_call::TrackPhoneCall,
};
