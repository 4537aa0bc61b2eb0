use triptych::{ConversationMemory, MockLlm};

use super::common;

#[tokio::test]
async fn post_topic_renders_three_sections() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(
        MockLlm::with_responses(["RESEARCH-OUT", "SUMMARY-OUT", "FEEDBACK-OUT"]),
        dir.path(),
    )
    .await;

    let resp = reqwest::Client::new()
        .post(format!("{}/", server.base_url))
        .form(&[("topic", "solar panels")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("solar panels"));
    for expected in ["RESEARCH-OUT", "SUMMARY-OUT", "FEEDBACK-OUT"] {
        assert!(body.contains(expected), "missing {} in {}", expected, body);
    }
    assert_eq!(server.memory.len(), 6);
}

#[tokio::test]
async fn post_escapes_llm_output() {
    let dir = tempfile::tempdir().unwrap();
    let server =
        common::spawn_server(MockLlm::with_content("<script>alert(1)</script>"), dir.path()).await;

    let body = reqwest::Client::new()
        .post(format!("{}/", server.base_url))
        .form(&[("topic", "xss")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn gateway_failure_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    let server =
        common::spawn_server(MockLlm::with_content("r").fail_on_call(2), dir.path()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/", server.base_url))
        .form(&[("topic", "solar panels")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = resp.text().await.unwrap();
    assert!(body.contains("class=\"error\""));
    assert_eq!(server.memory.len(), 2);
}

#[tokio::test]
async fn blank_topic_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(MockLlm::with_content("x"), dir.path()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/", server.base_url))
        .form(&[("topic", "   ")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(server.llm.call_count(), 0);
}

#[tokio::test]
async fn missing_topic_field_is_client_error() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(MockLlm::with_content("x"), dir.path()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/", server.base_url))
        .form(&[("subject", "tides")])
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_client_error(), "{}", resp.status());
    assert_eq!(server.llm.call_count(), 0);
}

#[tokio::test]
async fn successive_posts_share_process_memory() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(MockLlm::with_content("ok"), dir.path()).await;
    let client = reqwest::Client::new();

    for topic in ["volcanoes", "glaciers"] {
        let resp = client
            .post(format!("{}/", server.base_url))
            .form(&[("topic", topic)])
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
    }

    assert_eq!(server.memory.len(), 12);
    assert!(server.llm.prompts()[3].contains("Human: volcanoes"));
}

#[tokio::test]
async fn topic_reaches_pipeline_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(MockLlm::with_content("ok"), dir.path()).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/", server.base_url))
        .form(&[("topic", "  solar panels ")])
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(server.memory.turns()[0].text, "  solar panels ");
    assert!(server.llm.prompts()[0].ends_with("about:   solar panels ."));
}
