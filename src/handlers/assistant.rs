use crate::assistant::{example_prompts, image_download_name};
use crate::error::AppError;
use crate::handlers::AppState;
use crate::providers::ChatMessage;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

const DEFAULT_EXAMPLE_COUNT: usize = 4;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasRequest {
    pub event_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct ExamplesQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub mime_type: String,
    pub data_url: String,
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub prompts: Vec<&'static str>,
}

/// POST /api/ai/ideas
pub async fn post_ideas(
    State(state): State<AppState>,
    Json(request): Json<IdeasRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let text = state
        .assistant
        .generate_event_ideas(&request.event_type)
        .await?;
    Ok(Json(TextResponse { text }))
}

/// POST /api/ai/chat
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let text = state.assistant.chat(&request.history).await?;
    Ok(Json(TextResponse { text }))
}

/// GET /api/ai/chat/greeting
pub async fn get_greeting(State(state): State<AppState>) -> Json<TextResponse> {
    Json(TextResponse {
        text: state.assistant.greeting().to_string(),
    })
}

/// POST /api/ai/image
pub async fn post_image(
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> Result<Json<ImageResponse>, AppError> {
    let image = state.assistant.generate_image(&request.prompt).await?;
    Ok(Json(ImageResponse {
        data_url: image.to_data_url(),
        file_name: image_download_name(request.prompt.trim()),
        mime_type: image.mime_type,
    }))
}

/// GET /api/ai/image/examples
pub async fn get_image_examples(Query(query): Query<ExamplesQuery>) -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        prompts: example_prompts(query.count.unwrap_or(DEFAULT_EXAMPLE_COUNT)),
    })
}
