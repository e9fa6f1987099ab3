//! Wire types exchanged between the widget and the relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json::{display_value, is_truthy};

/// The JSON body posted by the widget to `/send-message`.
///
/// Both fields accept any JSON value. The relay applies JavaScript
/// truthiness, so `0`, `false` or `""` count as a missing message and a
/// truthy `anonymous` such as `1` marks the message anonymous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutgoingMessage {
    /// The user-authored text.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub message: Value,
    /// Whether identifying metadata must be left out of the notification.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub anonymous: Value,
}

impl OutgoingMessage {
    /// Creates the payload the widget sends: the given text, flagged anonymous.
    pub fn anonymous(message: impl Into<String>) -> Self {
        Self { message: Value::String(message.into()), anonymous: Value::Bool(true) }
    }

    /// Returns the message text, or `None` when it is absent or falsy.
    /// Truthy non-string values are rendered as text.
    pub fn text(&self) -> Option<String> {
        is_truthy(&self.message).then(|| display_value(&self.message))
    }

    /// Whether the sender asked for identifying metadata to be omitted.
    pub fn is_anonymous(&self) -> bool {
        is_truthy(&self.anonymous)
    }
}

/// The normalized JSON result returned by the relay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayResult {
    /// `true` only once the messaging API accepted the message.
    pub ok: bool,
    /// Human-readable reason for a failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResult {
    /// A successful delivery.
    pub fn success() -> Self {
        Self { ok: true, error: None }
    }

    /// A failed delivery with the given reason.
    pub fn failure(error: impl Into<String>) -> Self {
        Self { ok: false, error: Some(error.into()) }
    }
}
