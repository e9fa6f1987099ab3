//! Configuration module for the relay and the widget client.

mod app_config;
mod helpers;
mod http_base;
mod widget;

pub use app_config::{AppConfig, TelegramCredentials};
pub use helpers::{deserialize_duration_from_seconds, deserialize_optional_duration_from_seconds};
pub use http_base::BaseHttpClientConfig;
pub use widget::{DEFAULT_SERVER_URL, FALLBACK_PATH, WidgetConfig};
