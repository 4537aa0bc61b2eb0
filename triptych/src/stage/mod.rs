//! Pipeline stages: research, summarize, critique.
//!
//! Each stage is an [`LlmStage`] node: render the transcript, build the prompt,
//! call the gateway, store the reply in its field, then record the exchange in
//! memory. A gateway error is returned as-is; nothing is appended in that case.

mod kind;
pub mod prompt;

pub use kind::StageKind;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::memory::ConversationMemory;
use crate::pipeline::PipelineState;

/// One stage of the chain bound to a gateway and a memory handle.
///
/// **Interaction**: Registered as a `Node<PipelineState>` by `Pipeline`; reads and
/// writes the shared `ConversationMemory`.
pub struct LlmStage {
    kind: StageKind,
    llm: Arc<dyn LlmClient>,
    memory: Arc<dyn ConversationMemory>,
}

impl LlmStage {
    pub fn new(
        kind: StageKind,
        llm: Arc<dyn LlmClient>,
        memory: Arc<dyn ConversationMemory>,
    ) -> Self {
        Self { kind, llm, memory }
    }

    pub fn kind(&self) -> StageKind {
        self.kind
    }
}

#[async_trait]
impl Node<PipelineState> for LlmStage {
    fn id(&self) -> &str {
        self.kind.name()
    }

    async fn run(&self, mut state: PipelineState) -> Result<(PipelineState, Next), AgentError> {
        let transcript = self.memory.render();
        let prompt = self.kind.prompt(&state, &transcript);
        debug!(
            stage = self.kind.name(),
            prompt_len = prompt.len(),
            transcript_turns = self.memory.len(),
            "stage prompt built"
        );

        let output = self.llm.complete(&prompt).await?;

        self.memory
            .append_exchange(self.kind.user_label(&state), output.clone());
        self.kind.write_output(&mut state, output);
        Ok((state, Next::Continue))
    }
}
