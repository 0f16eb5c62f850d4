//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod search_term;
mod sort_order;

pub use search_term::*;
pub use sort_order::*;
