//! AI-assisted planning features: idea generator, chat planner, image studio.

use crate::error::AppError;
use crate::metrics::{record_ai_duration, record_ai_request};
use crate::providers::{ChatMessage, ChatRole, GeneratedImage, GenerativeProvider};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

pub const NOT_CONFIGURED_MESSAGE: &str = "API Key not configured. Please contact support.";
pub const IDEAS_FALLBACK_MESSAGE: &str =
    "Sorry, we couldn't generate ideas at this moment. Please try again later.";
pub const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I'm currently unavailable. Please try again later.";
pub const CHAT_GREETING: &str = "Hello! I am the KaSha AI Planner, your personal event assistant. How can I help you plan your perfect event today?";

pub const EMPTY_EVENT_TYPE_MESSAGE: &str = "Please enter an event type.";
pub const EMPTY_IMAGE_PROMPT_MESSAGE: &str = "Please enter a prompt to generate an image.";

pub const EXAMPLE_IMAGE_PROMPTS: [&str; 8] = [
    "A luxurious Indian wedding mandap decorated with thousands of white roses and gold accents, at sunset on a beach in Goa.",
    "A futuristic corporate event stage design with holographic displays and sleek, minimalist furniture, in a grand ballroom.",
    "An elegant table setting for a royal-themed gala dinner, with gold cutlery, crystal glasses, and elaborate floral centerpieces.",
    "A vibrant outdoor concert setup for a music festival in the hills of Lonavala, with a massive stage and colorful lighting.",
    "An immersive brand activation for a new perfume, with a walk-through garden of exotic flowers and scent diffusers.",
    "A high-energy marathon finish line in the heart of Mumbai, with cheering crowds and branded gantries.",
    "A serene destination wedding ceremony on a houseboat in the Kerala backwaters, surrounded by lush greenery.",
    "A chic and modern product launch for a tech gadget, with interactive demo stations and neon lighting.",
];

const DOWNLOAD_NAME_PREFIX_CHARS: usize = 30;

fn ideas_prompt(event_type: &str) -> String {
    format!(
        "Generate 3 creative and luxurious event ideas for a \"{}\" in India. Focus on unique themes, locations, and experiences that would appeal to a high-end client. Present the ideas as a numbered list with a title and a short, exciting description for each.",
        event_type
    )
}

/// `<first 30 chars, whitespace runs as _>_kasha_ai.png`
pub fn image_download_name(prompt: &str) -> String {
    let head: String = prompt.chars().take(DOWNLOAD_NAME_PREFIX_CHARS).collect();

    let mut name = String::with_capacity(head.len() + 13);
    let mut in_space = false;
    for c in head.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str("_kasha_ai.png");
    name
}

/// `count` distinct example prompts in random order
pub fn example_prompts(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    EXAMPLE_IMAGE_PROMPTS
        .choose_multiple(&mut rng, count.min(EXAMPLE_IMAGE_PROMPTS.len()))
        .copied()
        .collect()
}

#[derive(Clone)]
pub struct AssistantService {
    provider: Option<Arc<dyn GenerativeProvider>>,
    system_instruction: String,
}

impl AssistantService {
    pub fn new(provider: Option<Arc<dyn GenerativeProvider>>, system_instruction: String) -> Self {
        Self {
            provider,
            system_instruction,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn greeting(&self) -> &'static str {
        CHAT_GREETING
    }

    /// Three luxury concepts for `event_type`; provider failures become a
    /// friendly fallback text.
    pub async fn generate_event_ideas(&self, event_type: &str) -> Result<String, AppError> {
        let event_type = event_type.trim();
        if event_type.is_empty() {
            return Err(AppError::InvalidRequest(EMPTY_EVENT_TYPE_MESSAGE.to_string()));
        }
        let Some(provider) = &self.provider else {
            record_ai_request("ideas", "disabled");
            return Ok(NOT_CONFIGURED_MESSAGE.to_string());
        };

        let start = Instant::now();
        let result = provider.complete(&ideas_prompt(event_type)).await;
        record_ai_duration("ideas", start.elapsed());

        match result {
            Ok(text) => {
                record_ai_request("ideas", "ok");
                info!("Generated event ideas for '{}'", event_type);
                Ok(text)
            }
            Err(e) => {
                record_ai_request("ideas", "fallback");
                error!("Error generating event ideas: {}", e);
                Ok(IDEAS_FALLBACK_MESSAGE.to_string())
            }
        }
    }

    /// Planner reply to the transcript, which must end with a user turn
    pub async fn chat(&self, history: &[ChatMessage]) -> Result<String, AppError> {
        match history.last() {
            None => {
                return Err(AppError::InvalidRequest(
                    "Chat history cannot be empty".to_string(),
                ))
            }
            Some(last) if last.role != ChatRole::User => {
                return Err(AppError::InvalidRequest(
                    "The last chat message must come from the user".to_string(),
                ))
            }
            Some(last) if last.text.trim().is_empty() => {
                return Err(AppError::InvalidRequest(
                    "Message cannot be empty".to_string(),
                ))
            }
            Some(_) => {}
        }
        let Some(provider) = &self.provider else {
            record_ai_request("chat", "disabled");
            return Ok(NOT_CONFIGURED_MESSAGE.to_string());
        };

        let start = Instant::now();
        let result = provider
            .complete_chat(&self.system_instruction, history)
            .await;
        record_ai_duration("chat", start.elapsed());

        match result {
            Ok(text) => {
                record_ai_request("chat", "ok");
                Ok(text)
            }
            Err(e) => {
                record_ai_request("chat", "fallback");
                error!("Error generating chatbot response: {}", e);
                Ok(CHAT_FALLBACK_MESSAGE.to_string())
            }
        }
    }

    /// Errors propagate; the image studio shows them itself
    pub async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, AppError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::InvalidRequest(
                EMPTY_IMAGE_PROMPT_MESSAGE.to_string(),
            ));
        }
        let Some(provider) = &self.provider else {
            record_ai_request("image", "disabled");
            return Err(AppError::ProviderDisabled(NOT_CONFIGURED_MESSAGE.to_string()));
        };

        let start = Instant::now();
        let result = provider.generate_image(prompt).await;
        record_ai_duration("image", start.elapsed());

        match &result {
            Ok(image) => {
                record_ai_request("image", "ok");
                info!("Generated image ({} bytes)", image.bytes.len());
            }
            Err(e) => {
                record_ai_request("image", "error");
                error!("Error generating image: {}", e);
            }
        }
        result
    }
}
