//! Best-effort device model detection from a `User-Agent` string.
//!
//! This is a heuristic chain, not a user-agent parser. For many browsers the
//! generic token rule picks up an engine version or vendor token instead of a
//! device model, and that is accepted behavior.

use std::sync::LazyLock;

use regex::Regex;

use super::UNKNOWN;

/// Legacy Android fingerprint: `Android x; locale; <MODEL> Build/...`.
static ANDROID_BUILD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android[^;]*;[^;]*;\s*([^;)]+?)\s*Build").unwrap()
});

/// Upper-case/digit/hyphen token of at least three characters, such as `SM-G973F`.
static MODEL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z0-9\-]{3,})\b").unwrap());

static APPLE_DEVICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)iPhone|iPad").unwrap());

/// Extracts a device model from a user-agent string.
///
/// Rules are tried in order: Android build fingerprint, generic model token,
/// then a literal `iPhone`/`iPad`. Returns [`UNKNOWN`] when nothing matches.
/// The result depends only on the input.
pub fn extract_device_model(user_agent: &str) -> String {
    if user_agent.is_empty() || user_agent == UNKNOWN {
        return UNKNOWN.to_string();
    }

    if let Some(model) = ANDROID_BUILD
        .captures(user_agent)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|m| !m.is_empty())
    {
        return model.to_string();
    }

    if let Some(token) = MODEL_TOKEN.captures(user_agent).and_then(|caps| caps.get(1)) {
        return token.as_str().to_string();
    }

    if let Some(device) = APPLE_DEVICE.find(user_agent) {
        return device.as_str().to_string();
    }

    UNKNOWN.to_string()
}
