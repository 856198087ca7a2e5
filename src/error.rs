use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Client sent something we cannot act on
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Unknown slug / id
    #[error("Not found: {0}")]
    NotFound(String),
    /// Generative provider not configured
    #[error("Provider disabled: {0}")]
    ProviderDisabled(String),
    /// Upstream API error
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: StatusCode, message: String },
    /// Upstream answered 2xx but without usable output
    #[error("Empty response: {0}")]
    EmptyResponse(String),
    /// Payload decoding error
    #[error("Conversion error: {0}")]
    ConversionError(String),
    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::ProviderDisabled(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            Self::UpstreamError { status, message } => (*status, message.clone()),
            Self::EmptyResponse(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            Self::ConversionError(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            Self::HttpRequest(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidRequest(_) => "invalid_request",
        AppError::NotFound(_) => "not_found",
        AppError::ProviderDisabled(_) => "provider_disabled",
        AppError::UpstreamError { .. } => "upstream_error",
        AppError::EmptyResponse(_) => "empty_response",
        AppError::ConversionError(_) => "conversion_error",
        AppError::HttpRequest(_) => "http_request_error",
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConversionError(format!("JSON error: {}", err))
    }
}
