//! Customer account models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, RegisterDto, UpdateAccountDto, UserDto},
    server::error::AppError,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registered customer.
///
/// `primary_address_id` and `primary_payment_id` are weak references. The rows they point to
/// can be deleted independently, so readers check existence before relying on them.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub primary_address_id: Option<i32>,
    pub primary_payment_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            primary_address_id: self.primary_address_id,
            primary_payment_id: self.primary_payment_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is deliberately left behind.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            primary_address_id: entity.primary_address_id,
            primary_payment_id: entity.primary_payment_id,
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password hash, used only by login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a new user row. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterParam {
    /// Trims names and lower-cases the email so duplicates are detected case-insensitively.
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
        }
    }

    /// Checks required fields, email shape and password length.
    ///
    /// # Returns
    /// - `Ok(())` - Parameters are acceptable
    /// - `Err(AppError::BadRequest)` - The first problem found
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.is_empty()
            || self.password.is_empty()
            || self.first_name.is_empty()
            || self.last_name.is_empty()
        {
            return Err(AppError::BadRequest(
                "Email, password, first name and last name are required".to_string(),
            ));
        }

        if !is_valid_email(&self.email) {
            return Err(AppError::BadRequest("Email address is not valid".to_string()));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAccountParam {
    pub first_name: String,
    pub last_name: String,
}

impl UpdateAccountParam {
    pub fn from_dto(dto: UpdateAccountDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return Err(AppError::BadRequest(
                "First name and last name are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Accepts `local@domain.tld`: exactly one `@`, non-empty local part, and a domain with a
/// dot that neither starts nor ends it.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
