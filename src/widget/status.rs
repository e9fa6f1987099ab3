use std::fmt;

/// The status line shown under the widget's input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WidgetStatus {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// The user tried to send an empty or whitespace-only message.
    EmptyMessage,
    /// A request is in flight.
    Sending,
    /// The relay confirmed delivery.
    Delivered,
    /// The relay answered but reported a failure.
    Failed(String),
    /// Neither endpoint produced a usable response.
    Unreachable(String),
}

impl WidgetStatus {
    /// Whether the status reports a terminal failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Unreachable(_))
    }
}

impl fmt::Display for WidgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::EmptyMessage => write!(f, "Please write a message first."),
            Self::Sending => write!(f, "Sending..."),
            Self::Delivered => write!(f, "Sent! Your message has been delivered."),
            Self::Failed(reason) => write!(f, "Failed to send: {reason}"),
            Self::Unreachable(reason) => write!(f, "Could not reach the server: {reason}"),
        }
    }
}
