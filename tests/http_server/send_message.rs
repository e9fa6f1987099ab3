use mockito::Matcher;
use serde_json::{Value, json};

use crate::helpers::*;

#[tokio::test]
async fn anonymous_message_is_forwarded_without_metadata() {
    let mut telegram = mockito::Server::new_async().await;
    let mock = telegram
        .mock("POST", send_message_path().as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({ "chat_id": CHAT_ID, "parse_mode": "HTML" })),
            Matcher::Regex("Anonymous message from your web".to_string()),
            Matcher::Regex("a &lt;b&gt; c".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;
    let server = TestServer::new(&telegram).await;

    let resp = server
        .post("/send-message")
        .header("user-agent", "Mozilla/5.0 (Linux; Android 10; SM-G973F) AppleWebKit/537.36")
        .json(&json!({ "message": "a <b> c", "anonymous": true }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "ok": true }));
    mock.assert_async().await;

    server.cleanup();
}

#[tokio::test]
async fn identified_message_carries_request_metadata() {
    let mut telegram = mockito::Server::new_async().await;
    let mock = telegram
        .mock("POST", send_message_path().as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Secret message from your web".to_string()),
            Matcher::Regex("IP: 203.0.113.9".to_string()),
            Matcher::Regex("Device: SM-G973F".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;
    let server = TestServer::new(&telegram).await;

    let resp = server
        .post("/send-message")
        .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
        .header("user-agent", "Mozilla/5.0 (Linux; Android 10; SM-G973F) AppleWebKit/537.36")
        .json(&json!({ "message": "hello" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 200);
    mock.assert_async().await;

    server.cleanup();
}

#[tokio::test]
async fn missing_message_is_rejected_without_calling_telegram() {
    let mut telegram = mockito::Server::new_async().await;
    let mock = telegram
        .mock("POST", send_message_path().as_str())
        .expect(0)
        .create_async()
        .await;
    let server = TestServer::new(&telegram).await;

    let bodies = [
        json!({}),
        json!({ "message": "" }),
        json!({ "message": null }),
        json!({ "message": 0 }),
        json!({ "message": false }),
    ];
    for body in bodies {
        let resp = server.post("/send-message").json(&body).send().await.expect("Request failed");
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.expect("Failed to parse JSON");
        assert_eq!(body, json!({ "ok": false, "error": "message required" }));
    }
    mock.assert_async().await;

    server.cleanup();
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let telegram = mockito::Server::new_async().await;
    let server = TestServer::new(&telegram).await;

    let resp = server
        .post("/send-message")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "invalid request body");

    server.cleanup();
}

#[tokio::test]
async fn unconfigured_relay_returns_server_error() {
    let server = TestServer::unconfigured().await;

    let resp = server
        .post("/send-message")
        .json(&json!({ "message": "hi" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!({ "ok": false, "error": "server not configured with BOT_TOKEN/CHAT_ID" })
    );

    server.cleanup();
}

#[tokio::test]
async fn telegram_failure_returns_generic_error() {
    let mut telegram = mockito::Server::new_async().await;
    let mock = telegram
        .mock("POST", send_message_path().as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":false,"description":"Bad Request: chat not found"}"#)
        .create_async()
        .await;
    let server = TestServer::new(&telegram).await;

    let resp = server
        .post("/send-message")
        .json(&json!({ "message": "hi" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "ok": false, "error": "failed to send" }));
    mock.assert_async().await;

    server.cleanup();
}

#[tokio::test]
async fn cors_preflight_is_allowed_from_any_origin() {
    let telegram = mockito::Server::new_async().await;
    let server = TestServer::new(&telegram).await;

    let resp = server
        .client
        .request(reqwest::Method::OPTIONS, server.url("/send-message"))
        .header("origin", "https://blog.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Request failed");

    assert!(resp.status().is_success());
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    server.cleanup();
}
