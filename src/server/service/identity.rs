//! Bearer credential issuing and verification.
//!
//! Credentials are HS256 JWTs whose subject is the user id. The provider is built once at
//! startup from the configured secret and shared through `AppState`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    util::parse::parse_i32_from_string,
};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

#[derive(Clone)]
pub struct IdentityProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl IdentityProvider {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Lifetime of issued credentials, used for the cookie max-age as well.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a credential for the user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verifies a credential and returns the user id it was issued for.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the user the token names
    /// - `Err(AppError::AuthErr(InvalidToken))` - Malformed, expired or badly signed token
    /// - `Err(AppError::InternalErr)` - Correctly signed token with a non-numeric subject
    pub fn verify(&self, token: &str) -> Result<i32, AppError> {
        let data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        parse_i32_from_string(data.claims.sub)
    }
}
