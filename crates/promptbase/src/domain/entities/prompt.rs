//! Prompt - A stored, reusable instruction template
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Prompt - A title + body pair with a favorite flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Assigned by the store on insert, never changes
    pub id: i32,
    pub title: String,
    pub body: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a prompt
///
/// The store assigns `id` and both timestamps, so this carries only
/// the user-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrompt {
    pub title: String,
    pub body: String,
    pub is_favorite: bool,
}

impl NewPrompt {
    /// Build a new prompt, rejecting empty title or body
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        is_favorite: bool,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let body = body.into();
        ensure_not_blank("title", &title)?;
        ensure_not_blank("prompt", &body)?;

        Ok(Self {
            title,
            body,
            is_favorite,
        })
    }
}

/// Validated title/body replacement for an existing prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptUpdate {
    pub title: String,
    pub body: String,
}

impl PromptUpdate {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let body = body.into();
        ensure_not_blank("title", &title)?;
        ensure_not_blank("prompt", &body)?;

        Ok(Self { title, body })
    }
}

fn ensure_not_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
