//! # Feedback widget
//!
//! A headless controller for the feedback popup: panel visibility, the text
//! input, and the status line, plus delivery to the relay.
//!
//! - **`Widget`**: the state machine driven by user input.
//! - **`RelayTransport`**: the seam to the network. `HttpRelayTransport` is
//!   the `reqwest` implementation.
//! - **`SendStrategy`**: primary endpoint first, same-origin fallback once on
//!   a network failure.
//! - **`RelayReply`**: turns a raw response into a `DeliveryOutcome`.

mod client;
mod error;
mod reply;
mod status;
mod strategy;

#[cfg(test)]
pub use client::MockRelayTransport;
pub use client::{HttpRelayTransport, RawResponse, RelayTransport};
pub use error::WidgetError;
pub use reply::{DeliveryOutcome, RelayReply};
pub use status::WidgetStatus;
pub use strategy::{DeliveryAttempt, SendStrategy};

use crate::{config::WidgetConfig, models::OutgoingMessage};

/// Visibility of the widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Only the toggle button is shown.
    #[default]
    Closed,
    /// The panel with the input and controls is shown.
    Open,
}

/// A key identity as seen by the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The Enter key.
    Enter,
    /// Any other key.
    Other,
}

/// A key press inside the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key pressed.
    pub key: Key,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    /// Whether Meta (Cmd) was held.
    pub meta: bool,
}

impl KeyPress {
    /// A bare key press.
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false, meta: false }
    }

    /// Holds Ctrl.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Holds Meta.
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl+Enter or Meta+Enter.
    pub fn is_send_shortcut(&self) -> bool {
        self.key == Key::Enter && (self.ctrl || self.meta)
    }
}

/// The feedback widget.
pub struct Widget<T: RelayTransport> {
    transport: T,
    strategy: SendStrategy,
    panel: PanelState,
    input: String,
    input_focused: bool,
    status: WidgetStatus,
}

impl<T: RelayTransport> Widget<T> {
    /// Creates a closed widget that delivers through `transport`.
    pub fn new(transport: T, config: &WidgetConfig) -> Result<Self, WidgetError> {
        Ok(Self {
            transport,
            strategy: SendStrategy::from_config(config)?,
            panel: PanelState::Closed,
            input: String::new(),
            input_focused: false,
            status: WidgetStatus::Idle,
        })
    }

    /// Current panel visibility.
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the input has focus.
    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    /// Current status line.
    pub fn status(&self) -> &WidgetStatus {
        &self.status
    }

    /// Endpoints used for delivery.
    pub fn strategy(&self) -> &SendStrategy {
        &self.strategy
    }

    /// Opens a closed panel and focuses the input, or closes an open one.
    pub fn toggle_panel(&mut self) {
        match self.panel {
            PanelState::Closed => {
                self.panel = PanelState::Open;
                self.input_focused = true;
            }
            PanelState::Open => self.close_panel(),
        }
    }

    /// Closes the panel and drops input focus.
    pub fn close_panel(&mut self) {
        self.panel = PanelState::Closed;
        self.input_focused = false;
    }

    /// Focuses the input. Has no effect while the panel is closed.
    pub fn focus_input(&mut self) {
        self.input_focused = self.panel == PanelState::Open;
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Handles a key press in the input. Returns `true` when it triggered a
    /// send, which has completed by the time this returns.
    pub async fn handle_key(&mut self, key: KeyPress) -> bool {
        if !(self.input_focused && key.is_send_shortcut()) {
            return false;
        }
        self.send_message().await;
        true
    }

    /// Sends the trimmed input and updates the status. The input is cleared
    /// only on a confirmed delivery.
    pub async fn send_message(&mut self) -> &WidgetStatus {
        let message = self.input.trim();
        if message.is_empty() {
            self.status = WidgetStatus::EmptyMessage;
            return &self.status;
        }

        let body = OutgoingMessage::anonymous(message);
        self.status = WidgetStatus::Sending;

        self.status = match self.strategy.deliver(&self.transport, &body).await {
            Ok((attempt, raw)) => match RelayReply::interpret(raw) {
                Ok(DeliveryOutcome::Delivered) => {
                    tracing::debug!(?attempt, "Message delivered");
                    self.input.clear();
                    WidgetStatus::Delivered
                }
                Ok(DeliveryOutcome::Rejected(reason)) => {
                    tracing::error!(?attempt, reason = %reason, "Send failed");
                    WidgetStatus::Failed(reason)
                }
                Err(e) => {
                    tracing::error!(?attempt, error = %e, "SendMessage error");
                    WidgetStatus::Unreachable(e.to_string())
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "SendMessage error");
                WidgetStatus::Unreachable(e.to_string())
            }
        };

        &self.status
    }
}
