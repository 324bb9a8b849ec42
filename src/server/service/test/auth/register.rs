use super::*;
use crate::server::data::user::UserRepository;

/// Tests registering a new customer.
///
/// Expected: user stored with a hashed password and a credential naming the new user
#[tokio::test]
async fn creates_user_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let service = AuthService::new(db, &identity);
    let authenticated = service
        .register(register_param("ada@example.com", "correct horse"))
        .await?;

    assert_eq!(authenticated.user.email, "ada@example.com");
    assert_eq!(identity.verify(&authenticated.token)?, authenticated.user.id);

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("ada@example.com")
        .await?
        .unwrap();
    assert_ne!(credentials.password_hash, "correct horse");
    assert!(credentials.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests registering an email that differs from an existing one only by case.
///
/// Expected: Err(AuthErr(DuplicateEmail))
#[tokio::test]
async fn rejects_duplicate_email_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let service = AuthService::new(db, &identity);
    service
        .register(register_param("ada@example.com", "correct horse"))
        .await?;

    let result = service
        .register(register_param("ADA@Example.com", "another password"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::DuplicateEmail))
    ));

    Ok(())
}

/// Tests registering with a password below the minimum length.
///
/// Expected: Err(BadRequest) and no user stored
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let result = AuthService::new(db, &identity)
        .register(register_param("ada@example.com", "short"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!UserRepository::new(db).email_exists("ada@example.com").await?);

    Ok(())
}

/// Tests registering with a blank name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let mut param = register_param("ada@example.com", "correct horse");
    param.first_name = String::new();

    let result = AuthService::new(db, &identity).register(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
