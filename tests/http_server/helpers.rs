use std::{net::SocketAddr, sync::Arc};

use feedback_relay::{
    config::AppConfig,
    http_server::{self, ApiState},
};
use mockito::ServerGuard;
use reqwest::Client;
use tokio::task;

pub const BOT_TOKEN: &str = "123456:test-token";
pub const CHAT_ID: &str = "-100200300";

pub fn send_message_path() -> String {
    format!("/bot{BOT_TOKEN}/sendMessage")
}

pub struct TestServer {
    pub address: SocketAddr,
    pub server_handle: task::JoinHandle<()>,
    pub client: Client,
}

impl TestServer {
    /// Starts a relay forwarding to `telegram`.
    pub async fn new(telegram: &ServerGuard) -> Self {
        Self::with_config(AppConfig {
            bot_token: Some(BOT_TOKEN.to_string()),
            chat_id: Some(CHAT_ID.to_string()),
            telegram_api_url: telegram.url(),
            ..Default::default()
        })
        .await
    }

    /// Starts a relay without Telegram credentials.
    pub async fn unconfigured() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
        let address = listener.local_addr().expect("Failed to get address");

        let state = ApiState::from_config(Arc::new(config)).expect("Failed to build state");
        let server_handle = task::spawn(async move {
            http_server::run_server(listener, state).await.expect("Server failed");
        });

        Self { address, server_handle, client: Client::new() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("Request failed")
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn cleanup(self) {
        self.server_handle.abort();
    }
}
