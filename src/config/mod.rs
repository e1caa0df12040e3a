use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::EnhanceError;

/// Fallback values applied when a form field is left blank, plus the
/// token budgets and pricing forwarded alongside every completion.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnhanceDefaults {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_role_tokens")]
    pub max_role_tokens: i32,
    #[serde(default = "default_max_prompt_tokens")]
    pub max_prompt_tokens: i32,
    #[serde(default = "default_max_response_tokens")]
    pub max_response_tokens: i32,
    #[serde(default = "default_token_price")]
    pub token_price: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_chars_per_token")]
    pub chars_per_token: f64,
}

fn default_model() -> String {
    consts::DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    consts::DEFAULT_TEMPERATURE
}

fn default_max_role_tokens() -> i32 {
    consts::DEFAULT_MAX_ROLE_TOKENS
}

fn default_max_prompt_tokens() -> i32 {
    consts::DEFAULT_MAX_PROMPT_TOKENS
}

fn default_max_response_tokens() -> i32 {
    consts::DEFAULT_MAX_RESPONSE_TOKENS
}

fn default_token_price() -> f64 {
    consts::DEFAULT_TOKEN_PRICE
}

fn default_timeout_secs() -> u64 {
    consts::DEFAULT_TIMEOUT_SECS
}

fn default_chars_per_token() -> f64 {
    consts::DEFAULT_CHARS_PER_TOKEN
}

impl Default for EnhanceDefaults {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_role_tokens: default_max_role_tokens(),
            max_prompt_tokens: default_max_prompt_tokens(),
            max_response_tokens: default_max_response_tokens(),
            token_price: default_token_price(),
            timeout_secs: default_timeout_secs(),
            chars_per_token: default_chars_per_token(),
        }
    }
}

impl EnhanceDefaults {
    pub fn validate(&self) -> Result<(), EnhanceError> {
        if self.model.trim().is_empty() {
            return Err(EnhanceError::ConfigError("empty default model".to_string()));
        }
        if !(self.chars_per_token.is_finite() && self.chars_per_token > 0.0) {
            return Err(EnhanceError::ConfigError(format!(
                "chars_per_token must be positive, got {}",
                self.chars_per_token
            )));
        }
        if !(consts::MIN_TEMPERATURE..=consts::MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(EnhanceError::ConfigError(format!(
                "temperature out of range: {}",
                self.temperature
            )));
        }
        if self.max_response_tokens <= 0 {
            return Err(EnhanceError::ConfigError(format!(
                "max_response_tokens must be positive, got {}",
                self.max_response_tokens
            )));
        }
        if self.timeout_secs == 0 {
            return Err(EnhanceError::ConfigError(
                "timeout_secs must be positive".to_string(),
            ));
        }
        if !(self.token_price.is_finite() && self.token_price >= 0.0) {
            return Err(EnhanceError::ConfigError(format!(
                "token_price must be non-negative, got {}",
                self.token_price
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    #[serde(default)]
    pub defaults: EnhanceDefaults,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, EnhanceError>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, EnhanceError> {
        let config_file = std::env::var(consts::CONFIG_FILE_ENV)
            .unwrap_or(consts::DEFAULT_CONFIG_FILE.to_string());
        let config_str = std::fs::read_to_string(&config_file)?;
        parse_config(&config_str)
    }
}

/// Parses the JSON config and swaps the `api_key` env var name for its value.
pub fn parse_config(config_str: &str) -> Result<Config, EnhanceError> {
    let mut config: Config = serde_json::from_str(config_str)?;
    config.api_key = std::env::var(&config.api_key).unwrap_or_default();
    config.defaults.validate()?;
    Ok(config)
}

pub fn load_config() -> Result<Config, EnhanceError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
