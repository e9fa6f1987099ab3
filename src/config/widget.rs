use url::Url;

/// Primary relay endpoint used when no override is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/send-message";

/// Same-origin path the widget falls back to when the primary endpoint is
/// unreachable.
pub const FALLBACK_PATH: &str = "/send-message";

/// Client-side configuration for the feedback widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Override for the primary relay endpoint.
    pub server_url: Option<Url>,
    /// Origin of the page hosting the widget. The fallback path is resolved
    /// against it.
    pub origin: Url,
}

impl WidgetConfig {
    /// Creates a configuration for a widget hosted on `origin`.
    pub fn new(origin: Url) -> Self {
        Self { server_url: None, origin }
    }

    /// Sets the primary endpoint override.
    pub fn with_server_url(mut self, server_url: Url) -> Self {
        self.server_url = Some(server_url);
        self
    }

    /// The endpoint tried first: the override if set, the default otherwise.
    pub fn primary_url(&self) -> Result<Url, url::ParseError> {
        match &self.server_url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(DEFAULT_SERVER_URL),
        }
    }

    /// The same-origin endpoint tried once after a network failure.
    pub fn fallback_url(&self) -> Result<Url, url::ParseError> {
        self.origin.join(FALLBACK_PATH)
    }
}
