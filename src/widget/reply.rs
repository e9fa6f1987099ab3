//! Interpretation of relay responses.

use reqwest::StatusCode;
use serde_json::{Value, json};

use super::{RawResponse, WidgetError};
use crate::models::{display_value, is_truthy};

/// The final verdict on a single send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The relay accepted and forwarded the message.
    Delivered,
    /// The relay answered with a failure; carries the reason to display.
    Rejected(String),
}

/// A relay response with its body normalized to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayReply {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Parsed body, or `{ok, text}` wrapping a body that was not JSON.
    pub body: Value,
}

impl RelayReply {
    /// Parses a raw response.
    ///
    /// A body declared as JSON must parse. Any other body is parsed on a
    /// best-effort basis and wrapped as `{ok: <2xx>, text: <raw>}` when it is
    /// not JSON.
    pub fn parse(raw: RawResponse) -> Result<Self, WidgetError> {
        let body = if raw.is_json() {
            serde_json::from_str(&raw.body).map_err(|e| WidgetError::InvalidBody(e.to_string()))?
        } else {
            serde_json::from_str(&raw.body)
                .unwrap_or_else(|_| json!({ "ok": raw.status.is_success(), "text": raw.body }))
        };
        Ok(Self { status: raw.status, body })
    }

    /// Parses a raw response and applies the success policy.
    pub fn interpret(raw: RawResponse) -> Result<DeliveryOutcome, WidgetError> {
        Self::parse(raw).map(|reply| reply.outcome())
    }

    /// A 2xx response is a delivery unless its body carries a falsy `ok`.
    pub fn outcome(&self) -> DeliveryOutcome {
        let rejected_by_body = self.body.get("ok").is_some_and(|ok| !is_truthy(ok));
        if self.status.is_success() && !rejected_by_body {
            DeliveryOutcome::Delivered
        } else {
            DeliveryOutcome::Rejected(self.failure_reason())
        }
    }

    /// The `error` field, then the `text` field, then the status code.
    fn failure_reason(&self) -> String {
        ["error", "text"]
            .iter()
            .filter_map(|key| self.body.get(*key))
            .find(|value| is_truthy(value))
            .map(display_value)
            .unwrap_or_else(|| format!("status {}", self.status.as_u16()))
    }
}
