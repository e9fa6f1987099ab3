//! Per-request data the relay interpolates into a notification.

use std::net::IpAddr;

use axum::http::HeaderMap;

use crate::metadata::{self, LocalTimestamp};

/// Everything known about one inbound message at the moment it is relayed.
///
/// Values are stored raw. Escaping happens when the notification text is
/// composed, so every field goes through the same escaping step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContext {
    /// The user-authored text.
    pub message: String,
    /// Whether identifying fields must be left out of the notification.
    pub anonymous: bool,
    /// Client address, see [`metadata::client_ip`].
    pub client_ip: String,
    /// Locale-style date and time of receipt.
    pub timestamp_local: String,
    /// 24-hour time of receipt.
    pub time_only: String,
    /// Raw `User-Agent` header or `unknown`.
    pub user_agent: String,
    /// Heuristic device model, see [`metadata::extract_device_model`].
    pub device_model: String,
}

impl NotificationContext {
    /// Derives the context for a message from the request it arrived with.
    pub fn capture(
        message: &str,
        anonymous: bool,
        headers: &HeaderMap,
        remote: Option<IpAddr>,
        received_at: LocalTimestamp,
    ) -> Self {
        let user_agent = metadata::user_agent(headers);
        let device_model = metadata::extract_device_model(&user_agent);

        Self {
            message: message.to_string(),
            anonymous,
            client_ip: metadata::client_ip(headers, remote),
            timestamp_local: received_at.date_time,
            time_only: received_at.time_only,
            user_agent,
            device_model,
        }
    }
}
