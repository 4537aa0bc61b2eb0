//! The three stages and the state field each one reads and writes.

use crate::pipeline::PipelineState;

use super::prompt::{critique_prompt, research_prompt, summarize_prompt};

/// Which stage of the chain.
///
/// | stage       | reads      | writes     | user turn label |
/// |-------------|------------|------------|-----------------|
/// | `Research`  | `topic`    | `research` | the topic       |
/// | `Summarize` | `research` | `summary`  | `summarize`     |
/// | `Critique`  | `summary`  | `feedback` | `review`        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    Research,
    Summarize,
    Critique,
}

impl StageKind {
    /// Stages in execution order.
    pub const ALL: [StageKind; 3] = [StageKind::Research, StageKind::Summarize, StageKind::Critique];

    /// Node id in the graph.
    pub fn name(self) -> &'static str {
        match self {
            StageKind::Research => "research",
            StageKind::Summarize => "summarize",
            StageKind::Critique => "critique",
        }
    }

    /// The field this stage reads.
    pub fn input(self, state: &PipelineState) -> &str {
        match self {
            StageKind::Research => &state.topic,
            StageKind::Summarize => &state.research,
            StageKind::Critique => &state.summary,
        }
    }

    /// Builds this stage's prompt from the state and the rendered transcript.
    pub fn prompt(self, state: &PipelineState, transcript: &str) -> String {
        match self {
            StageKind::Research => research_prompt(state, transcript),
            StageKind::Summarize => summarize_prompt(state, transcript),
            StageKind::Critique => critique_prompt(state, transcript),
        }
    }

    /// Text of the user turn recorded for one invocation.
    pub fn user_label(self, state: &PipelineState) -> String {
        match self {
            StageKind::Research => state.topic.clone(),
            StageKind::Summarize => "summarize".to_string(),
            StageKind::Critique => "review".to_string(),
        }
    }

    /// The field this stage fills.
    pub fn output(self, state: &PipelineState) -> &str {
        match self {
            StageKind::Research => &state.research,
            StageKind::Summarize => &state.summary,
            StageKind::Critique => &state.feedback,
        }
    }

    /// Stores `output` in this stage's field, leaving every other field alone.
    pub fn write_output(self, state: &mut PipelineState, output: String) {
        match self {
            StageKind::Research => state.research = output,
            StageKind::Summarize => state.summary = output,
            StageKind::Critique => state.feedback = output,
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
