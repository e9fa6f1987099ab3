//! # Notification Service
//!
//! This module delivers relay messages to Telegram.
//!
//! ## Core Components
//!
//! - **`TemplateService`**: renders the notification text from a
//!   `NotificationContext`, escaping every field for Telegram HTML.
//! - **`Notifier` Trait**: the seam between the HTTP handler and the delivery
//!   channel. The handler only ever sees this trait.
//! - **`TelegramNotifier`**: the Bot API implementation, using the payload
//!   builder in `payload_builder`.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

pub mod error;
pub mod payload_builder;
mod telegram;
mod template;

pub use error::NotificationError;
pub use telegram::TelegramNotifier;
pub use template::{TemplateService, TemplateServiceError, escape_html};

/// What the messaging API reported back for a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryReceipt {
    /// The `ok` flag from the API response body, if it could be read.
    pub api_ok: Option<bool>,
}

/// A channel that can deliver composed notification text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers `text`, already composed and escaped, to the configured target.
    async fn notify(&self, text: &str) -> Result<DeliveryReceipt, NotificationError>;
}
