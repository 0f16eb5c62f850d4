//! Prompt request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use promptbase::Prompt;

/// Create prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub title: String,
    /// Prompt body
    pub prompt: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Update prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub title: String,
    pub prompt: String,
}

/// Set favorite request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetFavoriteRequest {
    pub is_favorite: bool,
}

/// Query parameters for listing prompts
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListPromptsQuery {
    /// Substring to match in title or prompt body
    pub search: Option<String>,
    /// most_recent (default), oldest, favorites
    pub sort: Option<String>,
}

/// Prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub id: i32,
    pub title: String,
    pub prompt: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            prompt: prompt.body,
            is_favorite: prompt.is_favorite,
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}
