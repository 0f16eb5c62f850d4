//! Prompt Repository Port
//!
//! Abstract interface for Prompt persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewPrompt, Prompt, PromptUpdate, SearchTerm, SortOrder};

/// Filter and ordering for prompt listings
#[derive(Debug, Default, Clone)]
pub struct PromptFilter {
    /// Substring to match in title or body
    pub search: Option<SearchTerm>,
    pub sort: SortOrder,
}

impl PromptFilter {
    pub fn new(search: Option<&str>, sort: SortOrder) -> Self {
        Self {
            search: SearchTerm::parse(search),
            sort,
        }
    }
}

/// Repository interface for Prompt entities
///
/// Every method maps to a single statement against the backing store.
/// Methods targeting an id return `Ok(None)` / `Ok(false)` when no row
/// matched; the application layer turns that into `DomainError::NotFound`.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Ensure the backing table exists (idempotent)
    async fn initialize(&self) -> Result<(), DomainError>;

    /// Insert a prompt and return it with its assigned id and timestamps
    async fn insert(&self, prompt: &NewPrompt) -> Result<Prompt, DomainError>;

    /// Find a prompt by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Prompt>, DomainError>;

    /// List prompts matching the filter, fully materialized
    async fn list(&self, filter: &PromptFilter) -> Result<Vec<Prompt>, DomainError>;

    /// Replace title and body in place
    async fn update(&self, id: i32, update: &PromptUpdate) -> Result<Option<Prompt>, DomainError>;

    /// Flip the favorite flag atomically
    async fn toggle_favorite(&self, id: i32) -> Result<Option<Prompt>, DomainError>;

    /// Set the favorite flag to an explicit value
    async fn set_favorite(&self, id: i32, is_favorite: bool)
        -> Result<Option<Prompt>, DomainError>;

    /// Delete a prompt by id
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
