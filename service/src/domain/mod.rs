//! Domain definitions.

pub mod event;
pub mod offering;
pub mod package;
pub mod quote;
pub mod site;
pub mod staffing;

pub use self::{
    event::{Guests, Hours},
    offering::Configuration,
    quote::Line,
};
