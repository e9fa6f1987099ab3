use crate::helpers::*;

#[tokio::test]
async fn status_page_reports_configured_bot() {
    let telegram = mockito::Server::new_async().await;
    let server = TestServer::new(&telegram).await;

    let resp = server.get("/").await;

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("<h1>Telegram Relay Server</h1>"));
    assert!(body.contains("Bot: <strong>configured</strong>"));
    assert!(body.contains(&format!("Chat target: <strong>{CHAT_ID}</strong>")));
    assert!(!body.contains(BOT_TOKEN));

    server.cleanup();
}

#[tokio::test]
async fn status_page_reports_missing_configuration() {
    let server = TestServer::unconfigured().await;

    let body = server.get("/").await.text().await.expect("Failed to read body");

    assert!(body.contains("Bot: <strong>not configured</strong>"));
    assert!(body.contains("Chat target: <strong>not configured</strong>"));

    server.cleanup();
}
