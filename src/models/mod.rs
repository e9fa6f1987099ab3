//! Data models shared by the relay and the widget.

pub mod context;
pub mod json;
pub mod message;

pub use context::NotificationContext;
pub use json::{display_value, is_truthy};
pub use message::{OutgoingMessage, RelayResult};
