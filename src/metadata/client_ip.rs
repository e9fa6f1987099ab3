use std::net::IpAddr;

use axum::http::HeaderMap;

use super::UNKNOWN;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Determines the client address for a request.
///
/// The first entry of `X-Forwarded-For` wins when present. Otherwise the
/// transport-level remote address is used, with IPv4-mapped IPv6 addresses
/// shown in their IPv4 form. Falls back to [`UNKNOWN`].
pub fn client_ip(headers: &HeaderMap, remote: Option<IpAddr>) -> String {
    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    match remote {
        Some(ip) => ip.to_canonical().to_string(),
        None => UNKNOWN.to_string(),
    }
}
