//! This module renders the notification text sent to Telegram using the
//! minijinja templating engine.
//!
//! Two templates exist: one for anonymous messages (message and time only)
//! and one for identified messages, which adds the client IP, device model,
//! and user agent. Every interpolated value passes through the `html` filter.

mod filters;

pub use filters::escape_html;

use minijinja::{Environment, context};
use thiserror::Error;

use crate::models::NotificationContext;

const ANONYMOUS_TEMPLATE: &str = "anonymous";
const IDENTIFIED_TEMPLATE: &str = "identified";

const ANONYMOUS_SOURCE: &str = "Anonymous message from your web:\n\n\
{{ message|html }}\n\n\
—\n\
Date: {{ timestamp_local|html }}\n\
Time: {{ time_only|html }}";

const IDENTIFIED_SOURCE: &str = "Secret message from your web:\n\n\
{{ message|html }}\n\n\
—\n\
Date: {{ timestamp_local|html }}\n\
Time: {{ time_only|html }}\n\
IP: {{ client_ip|html }}\n\
Device: {{ device_model|html }}\n\
User-Agent: {{ user_agent|html }}";

/// A service for rendering notification text.
pub struct TemplateService {
    env: Environment<'static>,
}

/// Error type for the TemplateService.
#[derive(Debug, Error)]
pub enum TemplateServiceError {
    /// The template could not be compiled or rendered.
    #[error("Failed to render template")]
    RenderError(#[from] minijinja::Error),
}

impl TemplateService {
    /// Creates a new instance of `TemplateService` with both notification
    /// templates compiled.
    pub fn new() -> Result<Self, TemplateServiceError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
        env.add_filter("html", filters::html);
        env.add_template(ANONYMOUS_TEMPLATE, ANONYMOUS_SOURCE)?;
        env.add_template(IDENTIFIED_TEMPLATE, IDENTIFIED_SOURCE)?;

        Ok(Self { env })
    }

    /// Renders the notification text for a message.
    ///
    /// Anonymous messages never include the client IP, device model, or user
    /// agent.
    pub fn render(&self, ctx: &NotificationContext) -> Result<String, TemplateServiceError> {
        let rendered = if ctx.anonymous {
            self.env.get_template(ANONYMOUS_TEMPLATE)?.render(context! {
                message => &ctx.message,
                timestamp_local => &ctx.timestamp_local,
                time_only => &ctx.time_only,
            })
        } else {
            self.env.get_template(IDENTIFIED_TEMPLATE)?.render(context! {
                message => &ctx.message,
                timestamp_local => &ctx.timestamp_local,
                time_only => &ctx.time_only,
                client_ip => &ctx.client_ip,
                device_model => &ctx.device_model,
                user_agent => &ctx.user_agent,
            })
        };

        rendered.map_err(|e| {
            tracing::warn!(anonymous = ctx.anonymous, "Failed to render notification: {}", e);
            TemplateServiceError::RenderError(e)
        })
    }
}
