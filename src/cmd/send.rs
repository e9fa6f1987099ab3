use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::{
    config::{BaseHttpClientConfig, WidgetConfig},
    widget::{HttpRelayTransport, Widget, WidgetError, WidgetStatus},
};

/// Errors that stop the `send` command before a delivery is attempted.
#[derive(Error, Debug)]
pub enum Error {
    /// The widget could not be set up.
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    /// The send completed but the message was not delivered.
    #[error("Message not delivered: {0}")]
    NotDelivered(WidgetStatus),
}

/// Arguments for `feedback-relay send`.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Primary relay endpoint. Defaults to the local relay.
    #[arg(short, long)]
    server_url: Option<Url>,
    /// Origin of the hosting page; the fallback endpoint is resolved against
    /// it.
    #[arg(short, long, default_value = "http://localhost:3000")]
    origin: Url,
    /// The message to send.
    message: String,
}

/// Drives the widget once: opens the panel, types the message and sends it.
///
/// Returns the final status. A failed delivery is a status, not an error.
pub async fn execute(args: SendArgs) -> Result<WidgetStatus, Error> {
    let mut config = WidgetConfig::new(args.origin);
    if let Some(server_url) = args.server_url {
        config = config.with_server_url(server_url);
    }

    let transport = HttpRelayTransport::from_config(&BaseHttpClientConfig::default())?;
    let mut widget = Widget::new(transport, &config)?;

    tracing::debug!(
        primary = %widget.strategy().primary,
        fallback = %widget.strategy().fallback,
        "Sending message"
    );

    widget.toggle_panel();
    widget.set_input(args.message);
    Ok(widget.send_message().await.clone())
}
