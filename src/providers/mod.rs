//! Generative AI provider abstraction.
//!
//! Callers only see [`GenerativeProvider`]; swapping the backing service means
//! adding an implementation and a branch in [`build_provider`].

pub mod gemini;

use crate::config::AiConfig;
use crate::error::AppError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

pub use gemini::GeminiProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One turn of a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Raw image returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[async_trait]
pub trait GenerativeProvider: Send + Sync + 'static {
    /// Provider type name (e.g. "gemini")
    fn provider_type(&self) -> &str;

    /// Single prompt in, text out
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;

    /// Multi-turn completion; `history` ends with the user's latest message
    async fn complete_chat(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, AppError>;

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, AppError>;
}

/// Provider for the configured AI section, `None` when AI is off or unkeyed
pub fn build_provider(cfg: &AiConfig) -> Option<Arc<dyn GenerativeProvider>> {
    if !cfg.enabled {
        info!("AI features disabled by configuration");
        return None;
    }
    let Some(api_key) = cfg.api_key() else {
        warn!("No Gemini API key configured, AI features will answer with a fallback message");
        return None;
    };

    info!(
        "AI provider: gemini (text={}, image={})",
        cfg.text_model, cfg.image_model
    );
    Some(Arc::new(
        GeminiProvider::new(
            reqwest::Client::new(),
            cfg.base_url.clone(),
            api_key.to_string(),
            cfg.text_model.clone(),
            cfg.image_model.clone(),
            cfg.timeout_seconds,
        )
        .with_generation_config(cfg.generation_config()),
    ))
}
