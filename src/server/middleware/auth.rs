//! Request identity and access policies.
//!
//! `AuthGuard` resolves the caller from the bearer credential, taken from the
//! `Authorization` header or else the `access_token` cookie, and applies one of three
//! policies:
//!
//! - `require` - anonymous callers fail with 401
//! - `permissive` - anonymous callers pass without a user
//! - `checkout_gated` - anonymous callers, and callers with a bad credential, are sent back
//!   to the checkout entry instead of failing

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        checkout::{Transition, ANONYMOUS_REDIRECT},
        user::User,
    },
    service::identity::IdentityProvider,
    util::cookie::read_access_token,
};

/// Outcome of the checkout-gated policy.
#[derive(Debug)]
pub enum Access {
    Granted(User),
    Redirect(Transition),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a IdentityProvider,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        identity: &'a IdentityProvider,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            identity,
            headers,
        }
    }

    /// Resolves the caller.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Valid credential for an existing user
    /// - `Ok(None)` - No credential presented
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad credential, or its user no longer exists
    pub async fn resolve(&self) -> Result<Option<User>, AppError> {
        let Some(token) = self.credential() else {
            return Ok(None);
        };

        let user_id = self.identity.verify(&token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::InvalidToken(format!("User {} no longer exists", user_id)).into());
        };

        Ok(Some(user))
    }

    /// Strict policy: the caller must be authenticated.
    pub async fn require(&self) -> Result<User, AppError> {
        self.resolve()
            .await?
            .ok_or_else(|| AuthError::MissingCredentials.into())
    }

    /// Permissive policy: anonymous callers pass, a presented credential must still be valid.
    pub async fn permissive(&self) -> Result<Option<User>, AppError> {
        self.resolve().await
    }

    /// Checkout-gated policy: anything short of a valid identity redirects to the entry.
    pub async fn checkout_gated(&self) -> Result<Access, AppError> {
        let user = match self.resolve().await {
            Ok(user) => user,
            Err(AppError::AuthErr(err)) => {
                tracing::debug!("Checkout credential rejected: {}", err);
                None
            }
            Err(err) => return Err(err),
        };

        Ok(match user {
            Some(user) => Access::Granted(user),
            None => Access::Redirect(ANONYMOUS_REDIRECT),
        })
    }

    fn credential(&self) -> Option<String> {
        let bearer = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        bearer.or_else(|| read_access_token(self.headers))
    }
}
