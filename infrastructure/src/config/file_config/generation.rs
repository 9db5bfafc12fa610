//! Text generation configuration from TOML (`[generation]` section)

use outreach_domain::GenerationSettings;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL of the API, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Output budget for the outreach draft.
    pub outreach_max_tokens: u32,
    /// Output budget for the recipient pick.
    pub selection_max_tokens: u32,
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let settings = GenerationSettings::default();
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: settings.model,
            outreach_max_tokens: settings.outreach_max_tokens,
            selection_max_tokens: settings.selection_max_tokens,
            temperature: settings.temperature,
            timeout_seconds: 60,
        }
    }
}

impl FileGenerationConfig {
    /// The configured key, falling back to the `api_key_env` variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn to_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.trim().to_string(),
            outreach_max_tokens: self.outreach_max_tokens,
            selection_max_tokens: self.selection_max_tokens,
            temperature: self.temperature,
        }
    }
}
