//! Promptbase Domain Library
//!
//! Core domain types and interfaces for storing, searching and
//! curating reusable prompts.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: `Prompt` plus validated `NewPrompt` / `PromptUpdate` inputs
//!   - `value_objects/`: `SortOrder`, `SearchTerm`
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptbase::{NewPrompt, PromptFilter, PromptRepository, SortOrder};
//!
//! let prompt = repo.insert(&NewPrompt::new("Greeting", "Say hello", false)?).await?;
//! let favorites = repo.list(&PromptFilter::new(None, SortOrder::Favorites)).await?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, NewPrompt, Prompt, PromptUpdate, SearchTerm, SortOrder};
pub use ports::{PromptFilter, PromptRepository};
