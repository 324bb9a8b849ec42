use super::*;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

/// Tests creating a new user.
///
/// Verifies that the user is stored with no primary references.
///
/// Expected: Ok(User)
#[tokio::test]
async fn creates_user_without_primary_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("ada@example.com")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert!(user.primary_address_id.is_none());
    assert!(user.primary_payment_id.is_none());
    assert!(repo.email_exists("ada@example.com").await?);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that inserting a second user with the same email is rejected by the database
/// with a unique constraint violation.
///
/// Expected: Err(UniqueConstraintViolation)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("ada@example.com")).await?;
    let result = repo.create(param("ada@example.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
