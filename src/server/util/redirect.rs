use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tower_sessions::cookie::Cookie;

/// 302 Found to `location`. Checkout steps answer form-style submissions with this.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// 302 Found to `location` that also sets `cookie`.
pub fn found_with_cookie(location: &str, cookie: Cookie<'static>) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location.to_string()),
            (header::SET_COOKIE, cookie.to_string()),
        ],
    )
        .into_response()
}
