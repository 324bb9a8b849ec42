use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::user::{AuthResponseDto, LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::CheckoutFlowSession},
        model::user::{AuthenticatedUser, LoginParam, RegisterParam},
        service::{account::AccountService, auth::AuthService, checkout::CheckoutService},
        state::AppState,
        util::cookie::{access_token_cookie, expired_access_token_cookie},
    },
};

/// Register a new customer account.
///
/// Creates the user, merges the session's guest cart into the new account and signs the
/// customer in. The credential is returned in the body and set as the `access_token` cookie.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and identity provider
/// - `session` - Session holding the guest cart id
/// - `payload` - Email, password, and name
///
/// # Returns
/// - `201 Created` - Account created, body carries the token and user
/// - `400 Bad Request` - Invalid email, short password, or missing name
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or session error
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &state.identity)
        .register(RegisterParam::from_dto(payload))
        .await?;

    sign_in_response(&state, &session, StatusCode::CREATED, authenticated).await
}

/// Sign in with email and password.
///
/// Merges the session's guest cart into the user's cart before responding.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and identity provider
/// - `session` - Session holding the guest cart id
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Signed in, body carries the token and user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthService::new(&state.db, &state.identity)
        .login(LoginParam::from_dto(payload))
        .await?;

    sign_in_response(&state, &session, StatusCode::OK, authenticated).await
}

/// Sign out.
///
/// Clears the server-side session, which ends any checkout in progress, and expires the
/// access-token cookie. Bearer tokens held by API clients stay valid until they expire.
///
/// # Returns
/// - `204 No Content` - Signed out
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    CheckoutFlowSession::new(&session).clear().await;

    Ok((
        StatusCode::NO_CONTENT,
        [(
            header::SET_COOKIE,
            expired_access_token_cookie(state.secure_cookies).to_string(),
        )],
    ))
}

/// Get the signed-in user.
///
/// # Access Control
/// - `Authenticated` - Bearer header or access-token cookie
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Missing or invalid credential
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.identity, &headers)
        .require()
        .await?;

    let user = AccountService::new(&state.db).get_account(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn sign_in_response(
    state: &AppState,
    session: &Session,
    status: StatusCode,
    authenticated: AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let flow = CheckoutFlowSession::new(session);

    let mut checkout = flow.load().await?;
    CheckoutService::new(&state.db)
        .sign_in(&mut checkout, authenticated.user.id)
        .await?;
    flow.save(&checkout).await?;

    let cookie = access_token_cookie(
        authenticated.token.clone(),
        state.identity.ttl(),
        state.secure_cookies,
    );

    Ok((
        status,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(AuthResponseDto {
            token: authenticated.token,
            user: authenticated.user.into_dto(),
        }),
    ))
}
