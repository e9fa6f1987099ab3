use std::{fmt, time::Duration};

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

use super::{
    BaseHttpClientConfig, deserialize_duration_from_seconds,
    deserialize_optional_duration_from_seconds,
};

/// Provides the default value for host.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Provides the default value for port.
fn default_port() -> u16 {
    3000
}

/// Provides the default value for telegram_api_url.
fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

/// Provides the default value for connect_timeout.
fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Credentials needed to deliver a message through the Telegram Bot API.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    /// Bot token issued by BotFather.
    pub bot_token: String,
    /// Target chat for delivered messages.
    pub chat_id: String,
}

impl fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Application configuration for the relay.
///
/// Built once at startup from the process environment and shared by
/// reference with every request handler.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// Telegram bot token (`BOT_TOKEN`).
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Telegram chat that receives messages (`CHAT_ID`).
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Interface the HTTP server binds to (`HOST`).
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the Telegram Bot API (`TELEGRAM_API_URL`).
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,

    /// Timeout for establishing outbound connections (`CONNECT_TIMEOUT_SECS`).
    #[serde(
        rename = "connect_timeout_secs",
        default = "default_connect_timeout",
        deserialize_with = "deserialize_duration_from_seconds"
    )]
    pub connect_timeout: Duration,

    /// Optional total timeout for outbound requests (`REQUEST_TIMEOUT_SECS`).
    #[serde(
        rename = "request_timeout_secs",
        default,
        deserialize_with = "deserialize_optional_duration_from_seconds"
    )]
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            host: default_host(),
            port: default_port(),
            telegram_api_url: default_telegram_api_url(),
            connect_timeout: default_connect_timeout(),
            request_timeout: None,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("chat_id", &self.chat_id)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` from the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    /// Creates a new `AppConfig` from an explicit set of variables instead of
    /// the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: Map<String, String> =
            vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::from_environment(Environment::default().source(Some(source)))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder().add_source(environment).build()?.try_deserialize()
    }

    /// Returns the Telegram credentials if both the bot token and the chat id
    /// are set to non-empty values.
    pub fn telegram_credentials(&self) -> Option<TelegramCredentials> {
        let bot_token = self.bot_token.as_deref().filter(|t| !t.is_empty())?;
        let chat_id = self.chat_id.as_deref().filter(|c| !c.is_empty())?;
        Some(TelegramCredentials { bot_token: bot_token.to_string(), chat_id: chat_id.to_string() })
    }

    /// The `host:port` pair the HTTP server binds to.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Settings for the outbound HTTP client.
    pub fn http_base_config(&self) -> BaseHttpClientConfig {
        BaseHttpClientConfig {
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            ..Default::default()
        }
    }
}
