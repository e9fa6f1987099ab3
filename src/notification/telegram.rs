//! Telegram notification implementation.
//!
//! Sends composed HTML text to a chat through the Bot API `sendMessage`
//! method. One request is made per notification.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{
    DeliveryReceipt, Notifier, error::NotificationError, payload_builder::TelegramPayloadBuilder,
};
use crate::config::TelegramCredentials;

/// Implementation of notifications via the Telegram Bot API
pub struct TelegramNotifier {
    /// Fully resolved `sendMessage` endpoint, including the bot token.
    url: Url,
    /// Builds the JSON body for the target chat.
    builder: TelegramPayloadBuilder,
    /// Shared HTTP client.
    client: Client,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier instance
    ///
    /// # Arguments
    /// * `api_base` - Base URL of the Bot API, e.g. `https://api.telegram.org`
    /// * `credentials` - Bot token and target chat
    /// * `client` - HTTP client used for delivery
    ///
    /// # Returns
    /// * `Result<Self, NotificationError>` - Notifier instance if the resulting
    ///   endpoint URL is valid
    pub fn new(
        api_base: &str,
        credentials: &TelegramCredentials,
        client: Client,
    ) -> Result<Self, NotificationError> {
        let endpoint = format!(
            "{}/bot{}/sendMessage",
            api_base.trim_end_matches('/'),
            credentials.bot_token
        );
        // The token is part of the URL, so it must not leak into the error.
        let url = Url::parse(&endpoint).map_err(|e| {
            NotificationError::ConfigError(format!("Invalid Telegram API URL '{api_base}': {e}"))
        })?;

        Ok(Self {
            url,
            builder: TelegramPayloadBuilder { chat_id: credentials.chat_id.clone() },
            client,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<DeliveryReceipt, NotificationError> {
        let payload = self.builder.build_payload(text);

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::RequestError(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::NotifyFailed { status, body });
        }

        let api_ok = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("ok").and_then(serde_json::Value::as_bool));

        Ok(DeliveryReceipt { api_ok })
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn credentials() -> TelegramCredentials {
        TelegramCredentials { bot_token: "123:abc".to_string(), chat_id: "-1001".to_string() }
    }

    #[test]
    fn test_endpoint_includes_token() {
        let notifier =
            TelegramNotifier::new("https://api.telegram.org/", &credentials(), Client::new())
                .unwrap();
        assert_eq!(notifier.url.as_str(), "https://api.telegram.org/bot123:abc/sendMessage");
    }

    #[test]
    fn test_invalid_api_base_is_rejected() {
        let result = TelegramNotifier::new("not a url", &credentials(), Client::new());
        assert!(matches!(result, Err(NotificationError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_notify_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "chat_id": "-1001",
                "text": "hello &amp; bye",
                "parse_mode": "HTML"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true,"result":{"message_id":7}}"#)
            .create_async()
            .await;

        let notifier = TelegramNotifier::new(&server.url(), &credentials(), Client::new()).unwrap();
        let receipt = notifier.notify("hello &amp; bye").await.unwrap();

        assert_eq!(receipt.api_ok, Some(true));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_notify_api_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .with_status(400)
            .with_body(r#"{"ok":false,"description":"Bad Request: chat not found"}"#)
            .create_async()
            .await;

        let notifier = TelegramNotifier::new(&server.url(), &credentials(), Client::new()).unwrap();
        let err = notifier.notify("hello").await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(reqwest::StatusCode::BAD_REQUEST));
        assert!(err.upstream_body().unwrap().contains("chat not found"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_notify_success_with_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .with_status(200)
            .with_body("accepted")
            .create_async()
            .await;

        let notifier = TelegramNotifier::new(&server.url(), &credentials(), Client::new()).unwrap();
        let receipt = notifier.notify("hello").await.unwrap();
        assert_eq!(receipt.api_ok, None);
    }

    #[tokio::test]
    async fn test_notify_unreachable_host() {
        let notifier =
            TelegramNotifier::new("http://127.0.0.1:1", &credentials(), Client::new()).unwrap();
        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, NotificationError::RequestError(_)));
        assert!(!err.to_string().contains("123:abc"), "token leaked: {err}");
    }
}
