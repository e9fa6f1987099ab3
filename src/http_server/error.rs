//! Defines the custom `ApiError` type for the HTTP server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    models::RelayResult,
    notification::{NotificationError, TemplateServiceError},
};

/// A custom error type for the API that can be converted into an HTTP response.
///
/// Every variant renders as `{ "ok": false, "error": "..." }`.
#[derive(Debug)]
pub enum ApiError {
    /// The request carried no usable `message`.
    MissingMessage,

    /// The request body could not be read as a JSON object.
    InvalidBody(String),

    /// Telegram credentials are not configured on the server.
    NotConfigured,

    /// The message could not be composed or forwarded. The cause is kept for
    /// logging and never sent to the client.
    DeliveryFailed(String),
}

impl ApiError {
    /// The public error message for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingMessage => "message required",
            ApiError::InvalidBody(_) => "invalid request body",
            ApiError::NotConfigured => "server not configured with BOT_TOKEN/CHAT_ID",
            ApiError::DeliveryFailed(_) => "failed to send",
        }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingMessage | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured | ApiError::DeliveryFailed(_) =>
                StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts a `NotificationError` into an `ApiError`.
///
/// This allows for the convenient use of the `?` operator in handlers.
impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        ApiError::DeliveryFailed(err.to_string())
    }
}

impl From<TemplateServiceError> for ApiError {
    fn from(err: TemplateServiceError) -> Self {
        ApiError::DeliveryFailed(err.to_string())
    }
}

/// Implements the conversion from `ApiError` into an `axum` response.
///
/// This is the central point for mapping internal application errors to
/// user-facing HTTP responses.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::InvalidBody(reason) =>
                tracing::debug!(reason = %reason, "Rejected /send-message body"),
            ApiError::DeliveryFailed(cause) =>
                tracing::error!("send-message error: {}", cause),
            ApiError::NotConfigured =>
                tracing::warn!("Rejected /send-message: BOT_TOKEN/CHAT_ID not configured"),
            ApiError::MissingMessage => {}
        }

        let status = self.status_code();
        (status, Json(RelayResult::failure(self.public_message()))).into_response()
    }
}
