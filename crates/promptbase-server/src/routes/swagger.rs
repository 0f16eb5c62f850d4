//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreatePromptRequest, PromptResponse, SetFavoriteRequest, UpdatePromptRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::prompt::list_prompts,
        super::prompt::create_prompt,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::toggle_favorite,
        super::prompt::set_favorite,
        super::prompt::delete_prompt,
    ),
    components(schemas(
        CreatePromptRequest,
        UpdatePromptRequest,
        SetFavoriteRequest,
        PromptResponse,
    )),
    tags(
        (name = "Prompt", description = "Store, search and curate prompts")
    ),
    info(
        title = "Promptbase API",
        version = "0.1.0",
        description = "A simple app to store and retrieve prompts",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
)]
pub struct ApiDoc;
