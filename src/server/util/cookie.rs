//! Access-token cookie handling.
//!
//! Browser clients carry their bearer credential in an HTTP-only cookie so checkout pages
//! work without script access to the token. API clients may send the same token in an
//! `Authorization: Bearer` header instead.

use axum::http::{header, HeaderMap};
use tower_sessions::cookie::{Cookie, SameSite};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Builds the cookie carrying a freshly issued credential.
///
/// # Arguments
/// - `token` - Signed credential
/// - `ttl` - Credential lifetime, used as the cookie max-age
/// - `secure` - Whether to restrict the cookie to HTTPS
pub fn access_token_cookie(token: String, ttl: chrono::Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build()
}

/// Builds a cookie that makes the browser drop the access token.
pub fn expired_access_token_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Reads the access token from the request's `Cookie` headers.
pub fn read_access_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
