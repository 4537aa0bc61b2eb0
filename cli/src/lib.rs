//! Library side of the `triptych` binary: pipeline assembly from env and flags,
//! and output rendering for `triptych run`.
//!
//! **Public API**: [`build_pipeline`], [`PipelineOptions`], [`render_text`], [`render_json`].

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use triptych::{
    BufferMemory, LlmClient, LlmConfig, LlmConfigError, LoggingNodeMiddleware, MemoryScope,
    MockLlm, Pipeline, PipelineConfig, PipelineOutput, PipelineState,
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    LlmConfig(#[from] LlmConfigError),
    #[error("provide a topic, e.g. `triptych run solar panels`")]
    MissingTopic,
}

/// How `build_pipeline` wires the gateway, memory and middleware.
#[derive(Clone, Debug, Default)]
pub struct PipelineOptions {
    /// Use an offline MockLlm that echoes prompts instead of a real gateway.
    pub mock: bool,
    /// Wrap stages in `LoggingNodeMiddleware` (enter/exit on stderr).
    pub verbose: bool,
    /// Overrides `TRIPTYCH_MEMORY_SCOPE`.
    pub memory_scope: Option<MemoryScope>,
}

fn build_llm(mock: bool) -> Result<Arc<dyn LlmClient>, CliError> {
    if mock {
        info!("using mock gateway");
        return Ok(Arc::new(MockLlm::echo_with_prefixes([
            "[mock research] ",
            "[mock summary] ",
            "[mock critique] ",
        ])));
    }
    let config = LlmConfig::from_env()?;
    info!(
        provider = ?config.provider,
        model = %config.model,
        temperature = config.temperature,
        "using chat completions gateway"
    );
    Ok(Arc::new(config.build()))
}

/// Builds a pipeline with a fresh process-scoped memory, the gateway from env (or
/// the mock), and the memory scope from `options` or env.
pub fn build_pipeline(options: &PipelineOptions) -> Result<Pipeline, CliError> {
    let llm = build_llm(options.mock)?;
    let mut config = PipelineConfig::from_env();
    if let Some(scope) = options.memory_scope {
        config.memory_scope = scope;
    }
    let pipeline = Pipeline::new(llm, Arc::new(BufferMemory::new())).with_config(config);
    Ok(if options.verbose {
        pipeline.with_middleware(Arc::new(LoggingNodeMiddleware::<PipelineState>::default()))
    } else {
        pipeline
    })
}

/// Joins positional words into one topic; blank input is [`CliError::MissingTopic`].
pub fn topic_from_words(words: &[String]) -> Result<String, CliError> {
    let topic = words.join(" ");
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(CliError::MissingTopic);
    }
    Ok(topic.to_string())
}

/// Plain-text report: one titled block per stage.
pub fn render_text(topic: &str, output: &PipelineOutput) -> String {
    format!(
        "Topic: {}\n\n== Research ==\n{}\n\n== Summary ==\n{}\n\n== Feedback ==\n{}\n",
        topic, output.research, output.summary, output.feedback
    )
}

/// JSON object with `topic`, `research`, `summary` and `feedback`.
pub fn render_json(
    topic: &str,
    output: &PipelineOutput,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let value = serde_json::json!({
        "topic": topic,
        "research": output.research,
        "summary": output.summary,
        "feedback": output.feedback,
    });
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}
