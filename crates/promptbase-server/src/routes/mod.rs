//! Promptbase API Routes
//!
//! - /prompts - Prompt storage, search and sorting
//! - /prompts/:id/favorite - Favorite flag

pub mod prompt;
pub mod swagger;
