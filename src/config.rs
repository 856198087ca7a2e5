use crate::estimator::RangeFactors;
use crate::models::gemini::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fallback environment variable for the Gemini key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are the 'KaSha AI Planner', a friendly and professional AI assistant for the KaSha luxury event planning company. Your goal is to help potential clients by answering their questions about our services, process, and brand. Be elegant, concise, and helpful. Do not mention that you are a language model.";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Empty allows any origin
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Range band and the guest widget bounds published to the form
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EstimatorConfig {
    #[serde(default = "default_range_low_factor")]
    pub range_low_factor: f64,
    #[serde(default = "default_range_high_factor")]
    pub range_high_factor: f64,
    #[serde(default = "default_min_guests")]
    pub min_guests: u32,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default = "default_guest_step")]
    pub guest_step: u32,
    #[serde(default = "default_guests")]
    pub default_guests: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            range_low_factor: default_range_low_factor(),
            range_high_factor: default_range_high_factor(),
            min_guests: default_min_guests(),
            max_guests: default_max_guests(),
            guest_step: default_guest_step(),
            default_guests: default_guests(),
        }
    }
}

impl EstimatorConfig {
    pub fn range_factors(&self) -> RangeFactors {
        RangeFactors {
            low: self.range_low_factor,
            high: self.range_high_factor,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Operator price table (JSON or TOML); the built-in table when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    #[serde(default = "default_ai_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
    /// Sampling temperature sent with text requests (0.0 - 2.0)
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: default_ai_base_url(),
            timeout_seconds: default_ai_timeout(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            system_instruction: default_system_instruction(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl AiConfig {
    /// Generation settings for text requests, `None` when nothing is set
    pub fn generation_config(&self) -> Option<GenerationConfig> {
        if self.temperature.is_none() && self.max_output_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        })
    }

    /// Configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_metrics_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_range_low_factor() -> f64 {
    0.9
}

fn default_range_high_factor() -> f64 {
    1.1
}

fn default_min_guests() -> u32 {
    10
}

fn default_max_guests() -> u32 {
    2000
}

fn default_guest_step() -> u32 {
    10
}

fn default_guests() -> u32 {
    crate::estimator::DEFAULT_GUEST_COUNT
}

fn default_true() -> bool {
    true
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_ai_timeout() -> u64 {
    60
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.to_string()
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}

/// Load `path` (optional file) layered with `KASHA__SECTION__KEY` variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("KASHA").separator("__"))
        .build()?;

    let mut cfg: Config = config.try_deserialize()?;
    if cfg.ai.api_key().is_none() {
        cfg.ai.api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());
    }
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }
    if !matches!(cfg.server.log_format.as_str(), "json" | "pretty") {
        anyhow::bail!(
            "server.log_format must be 'json' or 'pretty', got '{}'",
            cfg.server.log_format
        );
    }

    let est = &cfg.estimator;
    if est.range_factors().validate().is_err() {
        anyhow::bail!(
            "estimator range factors must satisfy 0 <= low <= 1 <= high (low={}, high={})",
            est.range_low_factor,
            est.range_high_factor
        );
    }
    if est.min_guests > est.max_guests {
        anyhow::bail!(
            "estimator.min_guests ({}) exceeds max_guests ({})",
            est.min_guests,
            est.max_guests
        );
    }
    if est.default_guests < est.min_guests || est.default_guests > est.max_guests {
        anyhow::bail!(
            "estimator.default_guests ({}) must lie within {}..={}",
            est.default_guests,
            est.min_guests,
            est.max_guests
        );
    }
    if est.guest_step == 0 {
        anyhow::bail!("estimator.guest_step must be at least 1");
    }

    if cfg.ai.enabled {
        if cfg.ai.text_model.trim().is_empty() {
            anyhow::bail!("ai.text_model cannot be empty when AI is enabled");
        }
        if cfg.ai.image_model.trim().is_empty() {
            anyhow::bail!("ai.image_model cannot be empty when AI is enabled");
        }
        if cfg.ai.timeout_seconds == 0 {
            anyhow::bail!("ai.timeout_seconds must be at least 1");
        }
        if let Some(t) = cfg.ai.temperature {
            if !(0.0..=2.0).contains(&t) {
                anyhow::bail!("ai.temperature must lie within 0.0..=2.0, got {}", t);
            }
        }
        if cfg.ai.max_output_tokens == Some(0) {
            anyhow::bail!("ai.max_output_tokens must be at least 1");
        }
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("metrics.endpoint must start with '/'");
    }

    Ok(())
}
