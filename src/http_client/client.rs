//! Construction of the shared `reqwest` client.
//!
//! Delivery is attempted once per request, so the client carries connection
//! pooling and timeouts only. No retry middleware is layered on top.

use reqwest::Client;
use thiserror::Error;

use crate::config::BaseHttpClientConfig;

/// Errors that can occur while building an HTTP client.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// An error occurred while building the underlying `reqwest::Client`.
    #[error("Failed to create HTTP client: {0}")]
    HttpClientBuildError(#[from] reqwest::Error),
}

/// Creates an HTTP client from the base client configuration.
///
/// # Parameters:
/// - `config`: Pooling and timeout settings
///
/// # Returns
/// A `reqwest::Client`, cheap to clone and safe to share across tasks.
pub fn create_http_client(config: &BaseHttpClientConfig) -> Result<Client, HttpClientError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(Some(config.idle_timeout))
        .connect_timeout(config.connect_timeout);

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}
