use super::common;

#[tokio::test]
async fn get_index_renders_empty_form() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(triptych::MockLlm::with_content("x"), dir.path()).await;

    let resp = reqwest::get(format!("{}/", server.base_url)).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);
    let body = resp.text().await.unwrap();
    assert!(body.contains("name=\"topic\""));
    assert!(!body.contains("<h2>Research</h2>"));
    assert_eq!(server.llm.call_count(), 0);
}
