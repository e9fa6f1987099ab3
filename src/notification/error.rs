//! Error types for the notification service.

use reqwest::StatusCode;
use thiserror::Error;

use crate::{http_client::HttpClientError, notification::template::TemplateServiceError};

/// Defines the possible errors that can occur while delivering a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// An error related to invalid configuration, such as a malformed API URL.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The messaging API answered with a non-success status.
    #[error("Notification failed with status {status}: {body}")]
    NotifyFailed {
        /// HTTP status returned by the messaging API.
        status: StatusCode,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// An error originating from building the HTTP client.
    #[error("HTTP client error")]
    HttpClientError(#[from] HttpClientError),

    /// A transport-level error from `reqwest`.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// An error related to the template rendering process.
    #[error("Template rendering error: {0}")]
    TemplateError(#[from] TemplateServiceError),
}

impl NotificationError {
    /// The upstream HTTP status, when the messaging API answered at all.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            NotificationError::NotifyFailed { status, .. } => Some(*status),
            NotificationError::RequestError(e) => e.status(),
            _ => None,
        }
    }

    /// The upstream response body, when one was received.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            NotificationError::NotifyFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}
