//! Request metadata derived by the relay for each inbound message.
//!
//! Everything here is computed per request from the request headers, the
//! transport address, and the wall clock. Nothing is cached between requests.

mod client_ip;
mod device;
mod timestamp;

pub use client_ip::client_ip;
pub use device::extract_device_model;
pub use timestamp::LocalTimestamp;

use axum::http::{HeaderMap, header};

/// Placeholder used whenever a piece of metadata cannot be determined.
pub const UNKNOWN: &str = "unknown";

/// Returns the raw `User-Agent` header, or [`UNKNOWN`] when absent or not
/// valid visible ASCII.
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}
