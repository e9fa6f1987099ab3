//! # Telegram Payload Builder
//!
//! Constructs the JSON body for the Telegram Bot API `sendMessage` method.
//! The text is expected to be already composed and escaped for HTML parse
//! mode; the builder only wraps it.

use serde_json::json;

/// Parse mode understood by Telegram for the composed text.
pub const PARSE_MODE_HTML: &str = "HTML";

/// A payload builder for Telegram notifications.
///
/// Telegram requires a `chat_id` and the message content in a `text` field.
/// It also supports a `parse_mode` to render markup.
#[derive(Debug, Clone)]
pub struct TelegramPayloadBuilder {
    /// The chat ID to send the message to.
    pub chat_id: String,
}

impl TelegramPayloadBuilder {
    /// Builds the `sendMessage` payload for already-escaped HTML text.
    pub fn build_payload(&self, text: &str) -> serde_json::Value {
        json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": PARSE_MODE_HTML,
        })
    }
}
