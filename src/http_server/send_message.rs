//! Handler for the `/send-message` endpoint.

use std::net::SocketAddr;

use axum::{
    body::{Body, to_bytes},
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Json},
};
use serde_json::Value;

use super::{ApiError, ApiState};
use crate::{
    metadata::LocalTimestamp,
    models::{NotificationContext, OutgoingMessage, RelayResult},
};

/// Largest request body accepted, in bytes.
const MAX_BODY_BYTES: usize = 100 * 1024;

/// Validates, enriches, formats, and forwards one message to Telegram.
pub async fn send_message(
    State(state): State<ApiState>,
    request: Request,
) -> Result<impl IntoResponse, ApiError> {
    let (parts, body) = request.into_parts();
    let remote = parts.extensions.get::<ConnectInfo<SocketAddr>>().map(|info| info.0.ip());

    let raw = read_json_body(&parts.headers, body).await?;
    let payload: OutgoingMessage =
        serde_json::from_value(raw.clone()).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    if payload.is_anonymous() {
        let redacted = (!payload.message.is_null()).then_some("[REDACTED]");
        tracing::info!(
            body.message = ?redacted,
            body.anonymous = true,
            "Incoming /send-message (anonymous)"
        );
    } else {
        tracing::info!(headers = ?parts.headers, body = %raw, "Incoming /send-message");
    }

    let text = payload.text().ok_or(ApiError::MissingMessage)?;

    let ctx = NotificationContext::capture(
        &text,
        payload.is_anonymous(),
        &parts.headers,
        remote,
        LocalTimestamp::now(),
    );
    let rendered = state.templates.render(&ctx)?;

    let notifier = state.notifier.as_ref().ok_or(ApiError::NotConfigured)?;

    let receipt = notifier.notify(&rendered).await.map_err(|e| {
        tracing::error!(
            error = %e,
            response_status = ?e.upstream_status(),
            response_data = ?e.upstream_body(),
            "Failed to forward message to Telegram"
        );
        ApiError::from(e)
    })?;

    tracing::info!(
        chat_id = ?state.config.chat_id,
        timestamp = %ctx.timestamp_local,
        ip = %ctx.client_ip,
        telegram_ok = ?receipt.api_ok,
        "Message forwarded to Telegram"
    );

    Ok((StatusCode::OK, Json(RelayResult::success())))
}

/// Reads the request body as a JSON object.
///
/// A request without a JSON content type, or with an empty body, is read as
/// an empty object so that it fails validation as a missing message.
async fn read_json_body(headers: &HeaderMap, body: Body) -> Result<Value, ApiError> {
    if !is_json_content_type(headers) {
        return Ok(Value::Object(Default::default()));
    }

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::InvalidBody(format!("failed to read body: {e}")))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    let value: Value =
        serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    if !value.is_object() {
        return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
    }

    Ok(value)
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}
