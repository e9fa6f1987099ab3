//! Represents the `/` status page and the `/health` probe.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use serde_json::json;

use super::ApiState;
use crate::notification::escape_html;

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Human-readable page reporting whether the relay is configured.
pub async fn status_page(State(state): State<ApiState>) -> Html<String> {
    let bot = if state.config.bot_token.as_deref().is_some_and(|t| !t.is_empty()) {
        "configured"
    } else {
        "not configured"
    };
    let chat = state
        .config
        .chat_id
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "not configured".to_string());

    Html(format!(
        r#"
    <html>
      <head><title>Telegram Relay</title></head>
      <body style="font-family:system-ui,Segoe UI,Roboto,Arial;margin:2rem;color:#222">
        <h1>Telegram Relay Server</h1>
        <p>This server receives POST <code>/send-message</code> and forwards messages to your Telegram bot.</p>
        <p>POST example (JSON): <code>{{ "message": "Hello" }}</code></p>
        <p>Bot: <strong>{bot}</strong></p>
        <p>Chat target: <strong>{chat}</strong></p>
      </body>
    </html>
  "#
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::{config::AppConfig, http_server::router};

    async fn get_page(config: AppConfig) -> (StatusCode, String, String) {
        let app = router(ApiState::new(Arc::new(config), None).unwrap());
        let response = app
            .oneshot(Request::builder().uri("/").method("GET").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_status_page_unconfigured() {
        let (status, content_type, body) = get_page(AppConfig::default()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Bot: <strong>not configured</strong>"));
        assert!(body.contains("Chat target: <strong>not configured</strong>"));
    }

    #[tokio::test]
    async fn test_status_page_configured_never_shows_token() {
        let config = AppConfig {
            bot_token: Some("123:secret".into()),
            chat_id: Some("<chat>".into()),
            ..Default::default()
        };
        let (_, _, body) = get_page(config).await;
        assert!(body.contains("Bot: <strong>configured</strong>"));
        assert!(body.contains("Chat target: <strong>&lt;chat&gt;</strong>"));
        assert!(!body.contains("123:secret"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = router(ApiState::new(Arc::new(AppConfig::default()), None).unwrap());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
