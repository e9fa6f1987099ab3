use std::time::Duration;

fn default_idle_per_host() -> usize {
    10
}

fn default_idle_timeout() -> Duration {
    Duration::from_secs(90)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Configuration for the base HTTP client used for outbound calls.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseHttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,

    /// Timeout for idle connections
    pub idle_timeout: Duration,

    /// Timeout for establishing connections
    pub connect_timeout: Duration,

    /// Total timeout for a single request. `None` leaves the transport default
    /// in place.
    pub request_timeout: Option<Duration>,
}

impl Default for BaseHttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: default_idle_per_host(),
            idle_timeout: default_idle_timeout(),
            connect_timeout: default_connect_timeout(),
            request_timeout: None,
        }
    }
}
