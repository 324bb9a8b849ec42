//! Password authentication.
//!
//! Registration and login both end with a freshly issued bearer credential. Cart
//! consolidation is not done here: callers run it with the session's cart id after the user
//! is known, so the session write happens after every database write has committed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthenticatedUser, CreateUserParam, LoginParam, RegisterParam},
    service::identity::IdentityProvider,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a IdentityProvider,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Creates an account and signs the new user in.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Created user and credential
    /// - `Err(AppError::BadRequest)` - Missing fields, malformed email or short password
    /// - `Err(AppError::AuthErr(DuplicateEmail))` - Email already registered
    pub async fn register(&self, param: RegisterParam) -> Result<AuthenticatedUser, AppError> {
        param.validate()?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&param.email).await? {
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                email: param.email,
                password_hash,
                first_name: param.first_name,
                last_name: param.last_name,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::DuplicateEmail.into(),
                _ => AppError::from(err),
            })?;

        tracing::info!("Registered user {}", user.id);

        let token = self.identity.issue(user.id)?;
        Ok(AuthenticatedUser { user, token })
    }

    /// Verifies email and password and issues a credential.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - User and credential
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, param: LoginParam) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        verify_password(&param.password, &credentials.password_hash)?;

        let user = credentials.user;
        tracing::debug!("User {} logged in", user.id);

        let token = self.identity.issue(user.id)?;
        Ok(AuthenticatedUser { user, token })
    }
}

/// Hashes a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored hash. An unparsable hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
