use crate::{
    error::AppError,
    models::gemini::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, PredictRequest,
        PredictResponse, SystemInstruction,
    },
    providers::{ChatMessage, GeneratedImage, GenerativeProvider},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

/// Gemini text models plus Imagen, over the public REST API
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    text_model: String,
    image_model: String,
    timeout_seconds: u64,
    generation_config: Option<GenerationConfig>,
}

impl GeminiProvider {
    pub fn new(
        client: Client,
        base_url: String,
        api_key: String,
        text_model: String,
        image_model: String,
        timeout_seconds: u64,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            text_model,
            image_model,
            timeout_seconds,
            generation_config: None,
        }
    }

    /// Sampling settings attached to every text request
    pub fn with_generation_config(mut self, generation_config: Option<GenerationConfig>) -> Self {
        self.generation_config = generation_config;
        self
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, AppError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .query(&[("key", self.api_key.as_str())])
            .timeout(Duration::from_secs(self.timeout_seconds))
            .json(body)
            .send()
            .await
            // the URL carries the API key
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamError {
                status,
                message: error_text,
            });
        }

        Ok(response.json().await.map_err(reqwest::Error::without_url)?)
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, AppError> {
        let url = self.model_url(&self.text_model, "generateContent");
        debug!(
            "Gemini generateContent: model={}, turns={}",
            self.text_model,
            request.contents.len()
        );

        let response: GenerateContentResponse = self.post_json(&url, request).await?;
        response
            .text()
            .ok_or_else(|| AppError::EmptyResponse("Gemini returned no text".to_string()))
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    fn provider_type(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text("user", prompt)],
            system_instruction: None,
            generation_config: self.generation_config.clone(),
        };
        self.generate_content(&request).await
    }

    async fn complete_chat(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
    ) -> Result<String, AppError> {
        let system_instruction = if system_instruction.trim().is_empty() {
            None
        } else {
            Some(SystemInstruction {
                parts: vec![Part::text(system_instruction)],
            })
        };
        let request = GenerateContentRequest {
            contents: history
                .iter()
                .map(|m| Content::text(m.role.as_str(), m.text.clone()))
                .collect(),
            system_instruction,
            generation_config: self.generation_config.clone(),
        };
        self.generate_content(&request).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, AppError> {
        let url = self.model_url(&self.image_model, "predict");
        debug!("Imagen predict: model={}", self.image_model);

        let response: PredictResponse = self
            .post_json(&url, &PredictRequest::single_image(prompt))
            .await?;

        let prediction = response
            .predictions
            .into_iter()
            .find(|p| p.bytes_base64_encoded.is_some())
            .ok_or_else(|| AppError::EmptyResponse("Image generation failed.".to_string()))?;

        let encoded = prediction.bytes_base64_encoded.unwrap_or_default();
        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| AppError::ConversionError(format!("Invalid image payload: {}", e)))?;

        Ok(GeneratedImage {
            mime_type: prediction
                .mime_type
                .unwrap_or_else(|| "image/png".to_string()),
            bytes,
        })
    }
}
