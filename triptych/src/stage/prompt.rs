//! Prompt templates for the three stages.
//!
//! Every prompt is the rendered transcript, then the stage instruction, then the
//! stage input. Builders are pure: same state and transcript, same prompt.

use crate::pipeline::PipelineState;

/// Header introducing the rendered transcript.
pub const CONTEXT_HEADER: &str = "Previous conversation context:";

/// Research instruction; the topic and a closing period follow it.
pub const RESEARCH_INSTRUCTION: &str =
    "Continue the research if related.\nProvide concise and clear research info about:";

/// Summarize instruction; the research output follows on the next line.
pub const SUMMARIZE_INSTRUCTION: &str = "Summarize the following clearly:";

/// Critique instruction; the summary follows on the next line.
pub const CRITIQUE_INSTRUCTION: &str = "Review and evaluate this summary for clarity and accuracy:";

fn with_context(transcript: &str, body: String) -> String {
    format!("{}\n{}\n\n{}", CONTEXT_HEADER, transcript, body)
}

/// Prompt for the research stage: transcript + instruction + topic.
pub fn research_prompt(state: &PipelineState, transcript: &str) -> String {
    with_context(
        transcript,
        format!("{} {}.", RESEARCH_INSTRUCTION, state.topic),
    )
}

/// Prompt for the summarize stage: transcript + instruction + research output.
pub fn summarize_prompt(state: &PipelineState, transcript: &str) -> String {
    with_context(
        transcript,
        format!("{}\n{}", SUMMARIZE_INSTRUCTION, state.research),
    )
}

/// Prompt for the critique stage: transcript + instruction + summary.
pub fn critique_prompt(state: &PipelineState, transcript: &str) -> String {
    with_context(
        transcript,
        format!("{}\n{}", CRITIQUE_INSTRUCTION, state.summary),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PipelineState {
        PipelineState {
            topic: "solar panels".into(),
            research: "R-OUT".into(),
            summary: "S-OUT".into(),
            feedback: String::new(),
        }
    }

    #[test]
    fn research_prompt_layout() {
        let p = research_prompt(&state(), "Human: earlier\nAI: reply");
        assert_eq!(
            p,
            "Previous conversation context:\nHuman: earlier\nAI: reply\n\n\
             Continue the research if related.\n\
             Provide concise and clear research info about: solar panels."
        );
    }

    #[test]
    fn summarize_prompt_ends_with_research() {
        let p = summarize_prompt(&state(), "");
        assert!(p.starts_with(CONTEXT_HEADER));
        assert!(p.ends_with("Summarize the following clearly:\nR-OUT"), "{}", p);
        assert!(!p.contains("S-OUT"));
    }

    #[test]
    fn critique_prompt_ends_with_summary() {
        let p = critique_prompt(&state(), "");
        assert!(p.ends_with(&format!("{}\nS-OUT", CRITIQUE_INSTRUCTION)), "{}", p);
    }

    #[test]
    fn builders_are_pure() {
        let s = state();
        assert_eq!(research_prompt(&s, "t"), research_prompt(&s, "t"));
        assert_eq!(critique_prompt(&s, "t"), critique_prompt(&s, "t"));
    }
}
