//! This module builds the HTTP client used for outbound calls to the
//! messaging API and, from the widget side, to the relay.

mod client;

pub use client::{HttpClientError, create_http_client};
