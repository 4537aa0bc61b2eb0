//! Mock LLM for tests and offline runs.
//!
//! Returns scripted text: one fixed reply, a sequence of replies, or the prompt
//! echoed back behind a per-call prefix. Can be told to fail on a given call to
//! exercise gateway-failure paths. Every prompt it receives is recorded.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;

enum Script {
    Fixed(String),
    /// Nth call returns the nth entry; calls past the end repeat the last one.
    Sequence(Vec<String>),
    /// Nth call returns `prefixes[n] + prompt`; calls past the end reuse the last prefix.
    PrefixEcho(Vec<String>),
}

/// Mock LLM: scripted replies plus optional failure on one call.
///
/// **Interaction**: Implements `LlmClient`; used by `LlmStage` in tests and by the CLI
/// when `--mock` is passed.
pub struct MockLlm {
    script: Script,
    /// 1-based call number that returns `GatewayFailure` instead of a reply.
    fail_on_call: Option<usize>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    fn from_script(script: Script) -> Self {
        Self {
            script,
            fail_on_call: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call returns `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::from_script(Script::Fixed(content.into()))
    }

    /// Calls return `responses` in order; the last one repeats once they run out.
    pub fn with_responses<I, T>(responses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_script(Script::Sequence(
            responses.into_iter().map(Into::into).collect(),
        ))
    }

    /// Calls return their prompt prefixed with `prefixes[n]` (e.g. `"R:"`, `"S:"`, `"C:"`).
    pub fn echo_with_prefixes<I, T>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_script(Script::PrefixEcho(
            prefixes.into_iter().map(Into::into).collect(),
        ))
    }

    /// Makes the `call`-th invocation (1-based) fail with `GatewayFailure` (builder).
    pub fn fail_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Number of invocations so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn reply(&self, index: usize, prompt: &str) -> String {
        fn pick(items: &[String], index: usize) -> &str {
            items
                .get(index)
                .or_else(|| items.last())
                .map(String::as_str)
                .unwrap_or_default()
        }
        match &self.script {
            Script::Fixed(content) => content.clone(),
            Script::Sequence(items) => pick(items, index).to_string(),
            Script::PrefixEcho(prefixes) => format!("{}{}", pick(prefixes, index), prompt),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let prompt = messages
            .iter()
            .map(Message::content)
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.clone());

        if self.fail_on_call == Some(index + 1) {
            return Err(AgentError::GatewayFailure(format!(
                "mock gateway failure on call {}",
                index + 1
            )));
        }
        Ok(LlmResponse {
            content: self.reply(index, &prompt),
            usage: None,
        })
    }
}
