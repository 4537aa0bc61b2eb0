//! LLM gateway abstraction used by the pipeline stages.
//!
//! A stage builds one prompt, sends it as a single user message and takes the
//! returned text verbatim. The gateway is opaque: it may be slow and it may fail;
//! failures come back as [`AgentError::GatewayFailure`] and are never retried here.

mod config;
mod mock;
mod openai;

pub use config::{LlmConfig, LlmConfigError, LlmProvider};
pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// Token usage for one LLM call (prompt + completion).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    /// Tokens in the prompt (input).
    pub prompt_tokens: u32,
    /// Tokens in the completion (output).
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion).
    pub total_tokens: u32,
}

/// Response from an LLM completion.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; `LlmStage` writes `content`
/// into its state field and into the assistant turn of the transcript.
#[derive(Clone, Debug, Default)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
    /// Token usage for this call, when the provider reports it.
    pub usage: Option<LlmUsage>,
}

/// LLM client: given messages, returns the assistant text.
///
/// Implementations: `MockLlm` (scripted responses), `ChatOpenAI` (OpenAI-compatible API).
///
/// **Interaction**: Used by `LlmStage` through [`LlmClient::complete`].
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;

    /// Sends `prompt` as a single user message and returns the reply text unchanged.
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        let response = self.invoke(&[Message::user(prompt)]).await?;
        Ok(response.content)
    }
}
