//! Prompt Routes - Prompt storage and curation
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use promptbase::{DomainError, SortOrder};

use crate::models::{
    CreatePromptRequest, ListPromptsQuery, PromptResponse, SetFavoriteRequest, UpdatePromptRequest,
};
use crate::AppState;

fn error_response(e: DomainError) -> (StatusCode, String) {
    match e {
        DomainError::NotFound { ref id, .. } => {
            (StatusCode::NOT_FOUND, format!("Prompt {} not found", id))
        }
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        _ => {
            tracing::error!("Prompt store failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// List prompts with optional search and sort
#[utoipa::path(
    get,
    path = "/prompts",
    params(ListPromptsQuery),
    responses(
        (status = 200, description = "Matching prompts", body = Vec<PromptResponse>),
        (status = 400, description = "Invalid sort order"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> Result<Json<Vec<PromptResponse>>, (StatusCode, String)> {
    let sort: SortOrder = query
        .sort
        .as_deref()
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| (StatusCode::BAD_REQUEST, e))?
        .unwrap_or_default();

    let prompts = state
        .prompt_service
        .list(query.search.as_deref(), sort)
        .await
        .map_err(error_response)?;

    Ok(Json(prompts.into_iter().map(Into::into).collect()))
}

/// Create new prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Empty title or prompt"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<PromptResponse>), (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .create(payload.title, payload.prompt, payload.is_favorite)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Get prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(("id" = i32, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PromptResponse>, (StatusCode, String)> {
    let prompt = state.prompt_service.get(id).await.map_err(error_response)?;

    Ok(Json(prompt.into()))
}

/// Update prompt title and body
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(("id" = i32, Path, description = "Prompt ID")),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Empty title or prompt"),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePromptRequest>,
) -> Result<Json<PromptResponse>, (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .update(id, payload.title, payload.prompt)
        .await
        .map_err(error_response)?;

    Ok(Json(prompt.into()))
}

/// Toggle favorite flag
#[utoipa::path(
    post,
    path = "/prompts/{id}/favorite",
    params(("id" = i32, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Favorite toggled", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PromptResponse>, (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .toggle_favorite(id)
        .await
        .map_err(error_response)?;

    Ok(Json(prompt.into()))
}

/// Set favorite flag explicitly
#[utoipa::path(
    put,
    path = "/prompts/{id}/favorite",
    params(("id" = i32, Path, description = "Prompt ID")),
    request_body = SetFavoriteRequest,
    responses(
        (status = 200, description = "Favorite set", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn set_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetFavoriteRequest>,
) -> Result<Json<PromptResponse>, (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .set_favorite(id, payload.is_favorite)
        .await
        .map_err(error_response)?;

    Ok(Json(prompt.into()))
}

/// Delete prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(("id" = i32, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    state
        .prompt_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Prompt deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt).put(update_prompt).delete(delete_prompt),
        )
        .route(
            "/prompts/:id/favorite",
            post(toggle_favorite).put(set_favorite),
        )
}
