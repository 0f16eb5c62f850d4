//! Prompt Application Service (Use Case)
//!
//! Orchestrates domain operations for prompt management.

use std::sync::Arc;

use promptbase::{
    DomainError, NewPrompt, Prompt, PromptFilter, PromptRepository, PromptUpdate, SortOrder,
};

/// Application service for Prompt operations
pub struct PromptService<R: PromptRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromptRepository + ?Sized> PromptService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Ensure the backing table exists
    pub async fn initialize(&self) -> Result<(), DomainError> {
        self.repo.initialize().await?;
        tracing::info!("Prompt store initialized");
        Ok(())
    }

    /// Create a new prompt
    pub async fn create(
        &self,
        title: String,
        body: String,
        is_favorite: bool,
    ) -> Result<Prompt, DomainError> {
        let new_prompt = NewPrompt::new(title, body, is_favorite)?;
        let saved = self.repo.insert(&new_prompt).await?;

        tracing::info!("Created prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Get a prompt by ID
    pub async fn get(&self, id: i32) -> Result<Prompt, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// List prompts, optionally filtered by a substring of title or body
    pub async fn list(
        &self,
        search: Option<&str>,
        sort: SortOrder,
    ) -> Result<Vec<Prompt>, DomainError> {
        let filter = PromptFilter::new(search, sort);
        let prompts = self.repo.list(&filter).await?;

        tracing::debug!(
            "Listed {} prompts (search: {:?}, sort: {})",
            prompts.len(),
            filter.search.as_ref().map(|t| t.as_str()),
            filter.sort
        );

        Ok(prompts)
    }

    /// Replace title and body of a prompt
    pub async fn update(&self, id: i32, title: String, body: String) -> Result<Prompt, DomainError> {
        let update = PromptUpdate::new(title, body)?;
        let updated = self
            .repo
            .update(id, &update)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::info!("Updated prompt: {} ({})", updated.title, updated.id);

        Ok(updated)
    }

    /// Flip the favorite flag
    pub async fn toggle_favorite(&self, id: i32) -> Result<Prompt, DomainError> {
        let toggled = self
            .repo
            .toggle_favorite(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::info!(
            "Prompt {} favorite set to {}",
            toggled.id,
            toggled.is_favorite
        );

        Ok(toggled)
    }

    /// Set the favorite flag to an explicit value
    pub async fn set_favorite(&self, id: i32, is_favorite: bool) -> Result<Prompt, DomainError> {
        self.repo
            .set_favorite(id, is_favorite)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// Delete a prompt permanently
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Prompt", id));
        }
        tracing::info!("Deleted prompt: {}", id);
        Ok(())
    }
}
