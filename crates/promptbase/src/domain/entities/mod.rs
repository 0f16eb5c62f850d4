//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: A stored instruction template with a favorite flag

mod prompt;

pub use prompt::*;
