//! Gateway settings resolved from the environment.
//!
//! - `OPENAI_API_KEY` selects OpenAI; `OPENAI_BASE_URL` (or `OPENAI_API_BASE`) overrides the endpoint.
//! - Otherwise `GOOGLE_API_KEY` selects Gemini via its OpenAI-compatible endpoint.
//! - `TRIPTYCH_MODEL` overrides the provider's default model.
//! - `TRIPTYCH_TEMPERATURE` (default 0.2).

use async_openai::config::OpenAIConfig;
use thiserror::Error;

use super::ChatOpenAI;

/// Gemini's OpenAI-compatible Chat Completions base URL.
pub const GEMINI_OPENAI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Error)]
pub enum LlmConfigError {
    #[error("no API key: set OPENAI_API_KEY or GOOGLE_API_KEY")]
    MissingApiKey,
    #[error("invalid TRIPTYCH_TEMPERATURE: {0}")]
    InvalidTemperature(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Gemini,
}

/// Resolved gateway settings. Build a client with [`LlmConfig::build`].
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub api_key: String,
    pub api_base: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl LlmConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, LlmConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup` (key → value); empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (provider, api_key, api_base, default_model) = if let Some(key) = get("OPENAI_API_KEY")
        {
            let base = get("OPENAI_BASE_URL").or_else(|| get("OPENAI_API_BASE"));
            (LlmProvider::OpenAi, key, base, DEFAULT_OPENAI_MODEL)
        } else if let Some(key) = get("GOOGLE_API_KEY") {
            (
                LlmProvider::Gemini,
                key,
                Some(GEMINI_OPENAI_BASE.to_string()),
                DEFAULT_GEMINI_MODEL,
            )
        } else {
            return Err(LlmConfigError::MissingApiKey);
        };

        let temperature = match get("TRIPTYCH_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|t| (0.0..=2.0).contains(t))
                .ok_or(LlmConfigError::InvalidTemperature(raw))?,
            None => DEFAULT_TEMPERATURE,
        };

        Ok(Self {
            provider,
            api_key,
            api_base,
            model: get("TRIPTYCH_MODEL").unwrap_or_else(|| default_model.to_string()),
            temperature,
        })
    }

    /// Builds the client for these settings.
    pub fn build(&self) -> ChatOpenAI {
        let config = OpenAIConfig::new().with_api_key(self.api_key.clone());
        let client = match &self.api_base {
            Some(base) => ChatOpenAI::with_config(config.with_api_base(base.clone()), self.model.clone())
                .with_api_base_label(base.clone()),
            None => ChatOpenAI::with_config(config, self.model.clone()),
        };
        client.with_temperature(self.temperature)
    }
}
