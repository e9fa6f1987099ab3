use url::Url;

use super::{RawResponse, RelayTransport, WidgetError};
use crate::{config::WidgetConfig, models::OutgoingMessage};

/// Which endpoint produced the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryAttempt {
    /// The configured primary endpoint.
    Primary,
    /// The same-origin fallback endpoint.
    Fallback,
}

/// Two-step delivery: the primary endpoint, then once against the fallback
/// if the primary produced no response at all. HTTP error statuses and
/// unreadable bodies never trigger the fallback, since the primary relay has
/// already handled the message by then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendStrategy {
    /// Endpoint tried first.
    pub primary: Url,
    /// Endpoint tried after a network failure.
    pub fallback: Url,
}

impl SendStrategy {
    /// Resolves both endpoints from the widget configuration.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, WidgetError> {
        Ok(Self { primary: config.primary_url()?, fallback: config.fallback_url()? })
    }

    /// Posts `body` following the strategy.
    pub async fn deliver<T>(
        &self,
        transport: &T,
        body: &OutgoingMessage,
    ) -> Result<(DeliveryAttempt, RawResponse), WidgetError>
    where
        T: RelayTransport + ?Sized,
    {
        match transport.post_json(&self.primary, body).await {
            Ok(response) => Ok((DeliveryAttempt::Primary, response)),
            Err(e @ WidgetError::Network(_)) => {
                tracing::warn!(
                    primary = %self.primary,
                    fallback = %self.fallback,
                    error = %e,
                    "Primary server failed, trying fallback"
                );
                let response = transport.post_json(&self.fallback, body).await?;
                Ok((DeliveryAttempt::Fallback, response))
            }
            Err(e) => Err(e),
        }
    }
}
