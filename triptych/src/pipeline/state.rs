use serde::{Deserialize, Serialize};

/// State threaded through the three stages of one run.
///
/// Starts with only `topic` set; research, summarize and critique each fill one
/// more field. Lives for a single run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineState {
    pub topic: String,
    pub research: String,
    pub summary: String,
    pub feedback: String,
}

impl PipelineState {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }
}

/// Result of a successful run: all three stage outputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub research: String,
    pub summary: String,
    pub feedback: String,
}

impl From<PipelineState> for PipelineOutput {
    fn from(state: PipelineState) -> Self {
        Self {
            research: state.research,
            summary: state.summary,
            feedback: state.feedback,
        }
    }
}
