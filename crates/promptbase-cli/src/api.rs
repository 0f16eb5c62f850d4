//! Promptbase API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use promptbase::SortOrder;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// API Client for Promptbase
pub struct PromptbaseClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    pub id: i32,
    pub title: String,
    pub prompt: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CreatePromptRequest<'a> {
    pub title: &'a str,
    pub prompt: &'a str,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct UpdatePromptRequest<'a> {
    pub title: &'a str,
    pub prompt: &'a str,
}

impl PromptbaseClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    fn list_url(&self, search: Option<&str>, sort: SortOrder) -> String {
        let mut url = format!("{}/prompts?sort={}", self.base_url, sort);
        if let Some(query) = search.filter(|q| !q.is_empty()) {
            url.push_str("&search=");
            url.push_str(&urlencoding::encode(query));
        }
        url
    }

    /// List prompts
    pub async fn list_prompts(
        &self,
        search: Option<&str>,
        sort: SortOrder,
    ) -> Result<Vec<PromptResponse>> {
        let resp = self
            .client
            .get(self.list_url(search, sort))
            .send()
            .await
            .context("Failed to connect to Promptbase API")?;

        let prompts: Vec<PromptResponse> = ensure_success(resp, None)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(prompts)
    }

    /// Get a specific prompt
    pub async fn get_prompt(&self, id: i32) -> Result<PromptResponse> {
        let url = format!("{}/prompts/{}", self.base_url, id);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Promptbase API")?;

        parse_prompt(ensure_success(resp, Some(id)).await?).await
    }

    /// Create a prompt
    pub async fn create_prompt(
        &self,
        title: &str,
        prompt: &str,
        is_favorite: bool,
    ) -> Result<PromptResponse> {
        let url = format!("{}/prompts", self.base_url);
        let request = CreatePromptRequest {
            title,
            prompt,
            is_favorite,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Promptbase API")?;

        parse_prompt(ensure_success(resp, None).await?).await
    }

    /// Replace title and body
    pub async fn update_prompt(&self, id: i32, title: &str, prompt: &str) -> Result<PromptResponse> {
        let url = format!("{}/prompts/{}", self.base_url, id);
        let request = UpdatePromptRequest { title, prompt };

        let resp = self
            .client
            .put(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Promptbase API")?;

        parse_prompt(ensure_success(resp, Some(id)).await?).await
    }

    /// Toggle the favorite flag
    pub async fn toggle_favorite(&self, id: i32) -> Result<PromptResponse> {
        let url = format!("{}/prompts/{}/favorite", self.base_url, id);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to Promptbase API")?;

        parse_prompt(ensure_success(resp, Some(id)).await?).await
    }

    /// Delete a prompt
    pub async fn delete_prompt(&self, id: i32) -> Result<()> {
        let url = format!("{}/prompts/{}", self.base_url, id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Promptbase API")?;

        ensure_success(resp, Some(id)).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into errors, reporting a missing prompt distinctly
async fn ensure_success(resp: Response, id: Option<i32>) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        bail!("Prompt {} not found", id);
    }

    let body = resp.text().await.unwrap_or_default();
    bail!("API error ({}): {}", status, body);
}

async fn parse_prompt(resp: Response) -> Result<PromptResponse> {
    resp.json().await.context("Failed to parse response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_without_search() {
        let client = PromptbaseClient::new("http://localhost:8000/");
        assert_eq!(
            client.list_url(None, SortOrder::MostRecent),
            "http://localhost:8000/prompts?sort=most_recent"
        );
    }

    #[test]
    fn test_list_url_encodes_search() {
        let client = PromptbaseClient::new("http://localhost:8000");
        assert_eq!(
            client.list_url(Some("50% & more"), SortOrder::Favorites),
            "http://localhost:8000/prompts?sort=favorites&search=50%25%20%26%20more"
        );
    }

    #[test]
    fn test_list_url_skips_empty_search() {
        let client = PromptbaseClient::new("http://localhost:8000");
        assert_eq!(
            client.list_url(Some(""), SortOrder::Oldest),
            "http://localhost:8000/prompts?sort=oldest"
        );
    }
}
