//! Request metadata helpers

use actix_web::{http::header, HttpRequest};

use crate::i18n::Language;

/// Proxy headers consulted for the client address, in priority order
const CLIENT_IP_HEADERS: [&str; 3] = ["X-Forwarded-For", "X-Real-IP", "X-NF-Client-Connection-IP"];

/// Client address used as the rate-limit key
///
/// First entry of `X-Forwarded-For`, else `X-Real-IP`, else the Netlify
/// client header, else the socket peer, else `"unknown"`.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    for name in CLIENT_IP_HEADERS {
        let value = req
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = value {
            return ip.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Message language from `Accept-Language`
pub fn extract_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}
