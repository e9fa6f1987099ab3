use thiserror::Error;

use crate::http_client::HttpClientError;

/// Errors raised on the widget side while talking to the relay.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A configured endpoint is not a valid URL.
    #[error("invalid relay URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("{0}")]
    Network(String),

    /// The relay answered but its body could not be read in full.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The relay declared a JSON body that could not be parsed.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// The outbound HTTP client could not be built.
    #[error(transparent)]
    HttpClient(#[from] HttpClientError),
}
