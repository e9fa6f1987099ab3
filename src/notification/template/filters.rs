//! This module provides custom filters for the minijinja templating engine

/// Escapes text for Telegram's HTML parse mode.
///
/// Covers `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// A minijinja filter wrapping [`escape_html`].
pub fn html(value: String) -> String {
    escape_html(&value)
}
