//! Pipeline runs against MockLlm: turn counts, verbatim outputs, prompt ordering,
//! failure on the second gateway call, and the prefix-echo end-to-end scenario.


use std::sync::Arc;

use triptych::{
    AgentError, BufferMemory, ConversationMemory, MockLlm, Pipeline, Speaker, Turn,
};

fn pipeline_with(llm: Arc<MockLlm>) -> (Pipeline, Arc<BufferMemory>) {
    let memory = Arc::new(BufferMemory::new());
    (Pipeline::new(llm, memory.clone()), memory)
}

#[tokio::test]
async fn run_appends_six_turns_in_user_assistant_pairs() {
    let llm = Arc::new(MockLlm::with_responses(["research", "summary", "feedback"]));
    let (pipeline, memory) = pipeline_with(llm.clone());

    pipeline.run("solar panels").await.unwrap();

    let turns = memory.turns();
    assert_eq!(turns.len(), 6);
    for pair in turns.chunks(2) {
        assert_eq!(pair[0].speaker, Speaker::User);
        assert_eq!(pair[1].speaker, Speaker::Assistant);
    }
    assert_eq!(
        turns,
        vec![
            Turn::user("solar panels"),
            Turn::assistant("research"),
            Turn::user("summarize"),
            Turn::assistant("summary"),
            Turn::user("review"),
            Turn::assistant("feedback"),
        ]
    );
    assert_eq!(llm.call_count(), 3);
}

#[tokio::test]
async fn research_field_is_gateway_reply_verbatim() {
    let reply = "  Raw **markdown**\n\nwith trailing space  ";
    let llm = Arc::new(MockLlm::with_responses([reply, "s", "c"]));
    let (pipeline, _) = pipeline_with(llm);

    let out = pipeline.run("tides").await.unwrap();

    assert_eq!(out.research, reply);
}

#[tokio::test]
async fn render_is_idempotent_after_run() {
    let (pipeline, memory) = pipeline_with(Arc::new(MockLlm::with_content("x")));
    pipeline.run("tides").await.unwrap();

    let first = memory.render();
    let second = memory.render();
    assert_eq!(first, second);
    assert!(first.starts_with("Human: tides\nAI: x"));
}

#[tokio::test]
async fn summarize_prompt_contains_research_output_but_not_reverse() {
    let llm = Arc::new(MockLlm::with_responses([
        "RESEARCH-7f3a",
        "SUMMARY-91bc",
        "FEEDBACK-0d2e",
    ]));
    let (pipeline, _) = pipeline_with(llm.clone());

    pipeline.run("tides").await.unwrap();

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains("RESEARCH-7f3a"));
    assert!(!prompts[0].contains("SUMMARY-91bc"));
    assert!(prompts[2].contains("SUMMARY-91bc"));
}

#[tokio::test]
async fn gateway_failure_on_summarize_keeps_research_turns_only() {
    let llm = Arc::new(MockLlm::with_content("research").fail_on_call(2));
    let (pipeline, memory) = pipeline_with(llm.clone());

    let err = pipeline.run("solar panels").await.unwrap_err();

    assert!(matches!(err, AgentError::GatewayFailure(_)), "{:?}", err);
    assert_eq!(llm.call_count(), 2);
    assert_eq!(
        memory.turns(),
        vec![Turn::user("solar panels"), Turn::assistant("research")]
    );
}

#[tokio::test]
async fn echo_gateway_threads_each_output_into_the_next() {
    let llm = Arc::new(MockLlm::echo_with_prefixes(["R:", "S:", "C:"]));
    let (pipeline, _) = pipeline_with(llm);

    let out = pipeline.run("solar panels").await.unwrap();

    assert!(out.research.starts_with("R:"));
    assert!(out.summary.starts_with("S:"));
    assert!(out.feedback.starts_with("C:"));
    assert!(out.research.contains("solar panels"));
    assert!(out.summary.contains(&out.research));
    assert!(out.feedback.contains(&out.summary));
}
