use super::common;

#[tokio::test]
async fn static_file_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
    let server = common::spawn_server(triptych::MockLlm::with_content("x"), dir.path()).await;

    let resp = reqwest::get(format!("{}/static/style.css", server.base_url))
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "body { margin: 0; }");
}

#[tokio::test]
async fn missing_static_file_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::spawn_server(triptych::MockLlm::with_content("x"), dir.path()).await;

    let resp = reqwest::get(format!("{}/static/nope.css", server.base_url))
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
