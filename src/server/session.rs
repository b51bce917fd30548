use super::error::ApiError;
use super::state::ServerState;
use crate::user::AuthTokenValue;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::debug;

#[derive(Debug)]
pub struct Session {
    pub user_id: String,
    pub token: String,
}

pub const COOKIE_SESSION_TOKEN_KEY: &str = "session_token";
pub const HEADER_SESSION_TOKEN_KEY: &str = "Authorization";

fn extract_session_token_from_cookies(parts: &Parts) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(COOKIE_SESSION_TOKEN_KEY)
        .map(Cookie::value)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Accepts both `Bearer <token>` and the bare token.
fn extract_session_token_from_headers(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(HEADER_SESSION_TOKEN_KEY)?;
    let value = String::from_utf8_lossy(value.as_bytes());
    let value = value.trim_start();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_owned())
    }
}

async fn extract_session_from_request_parts(
    parts: &Parts,
    ctx: &ServerState,
) -> Result<Session, ApiError> {
    let token = extract_session_token_from_cookies(parts)
        .or_else(|| extract_session_token_from_headers(parts))
        .ok_or_else(|| {
            debug!("No token in cookies nor headers.");
            ApiError::NoToken
        })?;

    match ctx.user_manager.get_auth_token(&AuthTokenValue(token))? {
        Some(auth_token) => Ok(Session {
            user_id: auth_token.user_id,
            token: auth_token.value.0,
        }),
        None => {
            debug!("Auth token not found or expired");
            Err(ApiError::InvalidToken)
        }
    }
}

impl FromRequestParts<ServerState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        extract_session_from_request_parts(parts, ctx).await
    }
}
