use axum::http::{header, HeaderMap};

use crate::error::HandlerError;

const SCHEME_PREFIX: &str = "Bearer ";

/// Checks the `authorization` header against the configured bearer token.
///
/// The header must read exactly `Bearer <token>`: the scheme is case-sensitive
/// and takes a single space.
pub fn authorize(headers: &HeaderMap, expected_token: &str) -> Result<(), HandlerError> {
    let Some(auth_value) = headers.get(header::AUTHORIZATION) else {
        log::warn!("Rejected request without an authorization header");
        return Err(HandlerError::Unauthorized);
    };

    let auth_str = auth_value.to_str().map_err(|_| {
        log::warn!("Rejected non-ASCII authorization header");
        HandlerError::Unauthorized
    })?;

    let Some(token) = auth_str.strip_prefix(SCHEME_PREFIX) else {
        log::warn!("Rejected authorization header without the Bearer scheme");
        return Err(HandlerError::Unauthorized);
    };

    if token != expected_token {
        log::warn!("Rejected bearer token: {}", mask_token(token));
        return Err(HandlerError::Unauthorized);
    }

    log::info!("Authentication successful for token: {}", mask_token(token));
    Ok(())
}

// Logs only the first and last four characters.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
