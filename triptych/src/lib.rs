//! # Triptych
//!
//! Research a topic, summarize the research, then critique the summary: three LLM
//! stages chained in a fixed linear graph with a **state-in, state-out** design.
//! One [`PipelineState`] flows through every stage; each stage fills exactly one field.
//!
//! ## Design principles
//!
//! - **Fixed chain**: `research → summarize → critique → END`, compiled once per run into
//!   an ordered node list ([`StateGraph`], [`CompiledStateGraph`]). No branching, no retries.
//! - **Shared transcript**: every stage reads the rendered [`ConversationMemory`] into its
//!   prompt and appends one user turn and one assistant turn. The memory handle is passed
//!   in explicitly; [`MemoryScope`] decides whether runs share it or get a fresh one.
//! - **Opaque gateway**: the model is any [`LlmClient`]. [`ChatOpenAI`] talks to an
//!   OpenAI-compatible endpoint; [`MockLlm`] scripts responses for tests.
//! - **Errors propagate**: a gateway failure surfaces as [`AgentError::GatewayFailure`];
//!   turns appended before the failure stay in memory.
//!
//! ## Main modules
//!
//! - [`pipeline`]: [`Pipeline`], [`PipelineState`], [`PipelineOutput`], [`PipelineConfig`].
//! - [`stage`]: [`StageKind`], [`LlmStage`] and the prompt templates.
//! - [`memory`]: [`ConversationMemory`], [`BufferMemory`], [`Turn`], [`Speaker`].
//! - [`llm`]: [`LlmClient`], [`MockLlm`], [`ChatOpenAI`], [`LlmConfig`].
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`], [`NodeMiddleware`].
//! - [`message`]: [`Message`] (System / User / Assistant).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use triptych::{BufferMemory, MockLlm, Pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), triptych::AgentError> {
//! let llm = Arc::new(MockLlm::with_content("a canned answer"));
//! let pipeline = Pipeline::new(llm, Arc::new(BufferMemory::new()));
//! let out = pipeline.run("solar panels").await?;
//! println!("{}\n{}\n{}", out.research, out.summary, out.feedback);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod llm;
pub mod memory;
pub mod message;
pub mod pipeline;
pub mod stage;

pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, LoggingNodeMiddleware, Next, Node, NodeMiddleware,
    StateGraph, END, START,
};
pub use llm::{ChatOpenAI, LlmClient, LlmConfig, LlmConfigError, LlmResponse, LlmUsage, MockLlm};
pub use memory::{BufferMemory, ConversationMemory, MemoryScope, Speaker, Turn};
pub use message::Message;
pub use pipeline::{Pipeline, PipelineConfig, PipelineOutput, PipelineState};
pub use stage::{LlmStage, StageKind};
