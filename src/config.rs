//! WOPR configuration.

use crate::llm_client::{LlmConfig, LlmProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Game and commentary settings, usually loaded from `wopr.toml`.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct WoprConfig {
    /// LLM provider (openai or anthropic).
    #[serde(default = "default_provider")]
    llm_provider: LlmProvider,

    /// LLM model name (e.g., "gpt-4o-mini", "claude-3-5-haiku-latest").
    #[serde(default = "default_model")]
    llm_model: String,

    /// Maximum tokens for a line of commentary.
    #[serde(default = "default_max_tokens")]
    llm_max_tokens: u32,

    /// How long to wait for commentary before using a canned line.
    #[serde(default = "default_commentary_timeout_ms")]
    commentary_timeout_ms: u64,

    /// How long WOPR "thinks" before answering the human's move.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,
}

fn default_provider() -> LlmProvider {
    LlmProvider::OpenAI
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    80
}

fn default_commentary_timeout_ms() -> u64 {
    8_000
}

fn default_opponent_delay_ms() -> u64 {
    600
}

impl Default for WoprConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            llm_model: default_model(),
            llm_max_tokens: default_max_tokens(),
            commentary_timeout_ms: default_commentary_timeout_ms(),
            opponent_delay_ms: default_opponent_delay_ms(),
        }
    }
}

impl WoprConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            provider = %config.llm_provider,
            model = %config.llm_model,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from a file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Commentary timeout as a duration.
    pub fn commentary_timeout(&self) -> Duration {
        Duration::from_millis(self.commentary_timeout_ms)
    }

    /// Opponent thinking delay as a duration.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Creates LLM configuration, reading the provider's API key from the environment.
    ///
    /// Requires `OPENAI_API_KEY` or `ANTHROPIC_API_KEY`.
    #[instrument(skip(self), fields(provider = %self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        self.llm_config_with_key(std::env::var(self.llm_provider.api_key_var()).ok())
    }

    /// Creates LLM configuration from an explicit, possibly missing, API key.
    #[instrument(skip(self, api_key))]
    pub fn llm_config_with_key(&self, api_key: Option<String>) -> Result<LlmConfig, ConfigError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "{} environment variable not set",
                    self.llm_provider.api_key_var()
                ))
            })?;

        Ok(LlmConfig::new(
            self.llm_provider,
            api_key,
            self.llm_model.clone(),
            self.llm_max_tokens,
        ))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
