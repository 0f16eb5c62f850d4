//! Promptbase API Models
//!
//! Request/response shapes for the HTTP layer. Domain types live in
//! the `promptbase` crate.

mod prompt;

pub use prompt::*;
