//! Infrastructure layer.

pub mod page;

pub use self::page::{Memory, Page};
