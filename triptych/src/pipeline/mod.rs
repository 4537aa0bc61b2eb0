//! Pipeline orchestrator: `research → summarize → critique → END`.
//!
//! [`Pipeline::run`] builds the three [`LlmStage`] nodes, wires them into a
//! [`StateGraph`], and invokes it with a fresh [`PipelineState`]. Any stage error
//! ends the run and is returned unchanged; turns already appended stay in memory.

mod config;
mod state;

pub use config::{PipelineConfig, ENV_MEMORY_SCOPE};
pub use state::{PipelineOutput, PipelineState};

use std::sync::Arc;

use tracing::Instrument;

use crate::error::AgentError;
use crate::graph::{CompiledStateGraph, NodeMiddleware, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::memory::{BufferMemory, ConversationMemory, MemoryScope};
use crate::stage::{LlmStage, StageKind};

/// Research, summarize and critique a topic.
///
/// Holds the gateway and, for [`MemoryScope::Process`], the transcript shared by
/// every run. Cheap to share behind an `Arc`; `run` takes `&self`.
///
/// **Interaction**: Used by the `serve` handlers and the `triptych run` command.
pub struct Pipeline {
    llm: Arc<dyn LlmClient>,
    memory: Arc<dyn ConversationMemory>,
    config: PipelineConfig,
    middleware: Option<Arc<dyn NodeMiddleware<PipelineState>>>,
}

impl Pipeline {
    /// Creates a pipeline with default config ([`MemoryScope::Process`]).
    pub fn new(llm: Arc<dyn LlmClient>, memory: Arc<dyn ConversationMemory>) -> Self {
        Self {
            llm,
            memory,
            config: PipelineConfig::default(),
            middleware: None,
        }
    }

    pub fn with_config(self, config: PipelineConfig) -> Self {
        Self { config, ..self }
    }

    /// Wraps every stage run with `middleware` (e.g. `LoggingNodeMiddleware`).
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<PipelineState>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// The process-scoped transcript. With [`MemoryScope::PerRun`] runs never touch it.
    pub fn memory(&self) -> &Arc<dyn ConversationMemory> {
        &self.memory
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs all three stages once for `topic`, using the memory chosen by the
    /// configured [`MemoryScope`].
    pub async fn run(&self, topic: &str) -> Result<PipelineOutput, AgentError> {
        let memory: Arc<dyn ConversationMemory> = match self.config.memory_scope {
            MemoryScope::Process => self.memory.clone(),
            MemoryScope::PerRun => Arc::new(BufferMemory::new()),
        };
        let span = tracing::info_span!(
            "pipeline_run",
            topic = %topic,
            scope = %self.config.memory_scope
        );
        self.run_in(topic, memory).instrument(span).await
    }

    /// Runs all three stages against an explicit memory handle (e.g. one per session).
    /// The configured scope does not apply; the span records `scope = "explicit"`.
    pub async fn run_with_memory(
        &self,
        topic: &str,
        memory: Arc<dyn ConversationMemory>,
    ) -> Result<PipelineOutput, AgentError> {
        let span = tracing::info_span!("pipeline_run", topic = %topic, scope = "explicit");
        self.run_in(topic, memory).instrument(span).await
    }

    async fn run_in(
        &self,
        topic: &str,
        memory: Arc<dyn ConversationMemory>,
    ) -> Result<PipelineOutput, AgentError> {
        let graph = self.build_graph(memory)?;
        let state = graph.invoke(PipelineState::new(topic)).await?;
        tracing::info!("pipeline run complete");
        Ok(PipelineOutput::from(state))
    }

    fn build_graph(
        &self,
        memory: Arc<dyn ConversationMemory>,
    ) -> Result<CompiledStateGraph<PipelineState>, AgentError> {
        let mut graph = StateGraph::<PipelineState>::new();
        for kind in StageKind::ALL {
            graph.add_node(
                kind.name(),
                Arc::new(LlmStage::new(kind, self.llm.clone(), memory.clone())),
            );
        }
        let mut from = START;
        for kind in StageKind::ALL {
            graph.add_edge(from, kind.name());
            from = kind.name();
        }
        graph.add_edge(from, END);

        let graph = match &self.middleware {
            Some(middleware) => graph.with_middleware(middleware.clone()),
            None => graph,
        };
        graph
            .compile()
            .map_err(|e| AgentError::ExecutionFailed(format!("pipeline graph: {}", e)))
    }
}
