//! Transport used by the widget to post messages to the relay.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use url::Url;

use super::WidgetError;
use crate::{
    config::BaseHttpClientConfig,
    http_client::create_http_client,
    models::OutgoingMessage,
};

/// A response as received from the relay, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Raw body text.
    pub body: String,
}

impl RawResponse {
    /// Whether the body is declared as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Posts a JSON message to a relay endpoint.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Posts `body` to `url`. Any HTTP status is returned as a `RawResponse`.
    /// A request that got no response fails with `WidgetError::Network`, and
    /// a response whose body could not be read fails with `WidgetError::Body`.
    async fn post_json(
        &self,
        url: &Url,
        body: &OutgoingMessage,
    ) -> Result<RawResponse, WidgetError>;
}

/// `RelayTransport` over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpRelayTransport {
    client: Client,
}

impl HttpRelayTransport {
    /// Wraps an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a transport with its own client.
    pub fn from_config(config: &BaseHttpClientConfig) -> Result<Self, WidgetError> {
        Ok(Self::new(create_http_client(config)?))
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn post_json(
        &self,
        url: &Url,
        body: &OutgoingMessage,
    ) -> Result<RawResponse, WidgetError> {
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|e| WidgetError::Body(e.to_string()))?;

        Ok(RawResponse { status, content_type, body })
    }
}
