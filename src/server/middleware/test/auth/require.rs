use super::*;

/// Tests a valid bearer header.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn accepts_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let user = factory::create_user(db).await?;
    let headers = bearer(&identity.issue(user.id)?);

    let resolved = AuthGuard::new(db, &identity, &headers).require().await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests a valid access-token cookie without a header.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn falls_back_to_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let user = factory::create_user(db).await?;
    let headers = cookie(&identity.issue(user.id)?);

    let resolved = AuthGuard::new(db, &identity, &headers).require().await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests a request without any credential.
///
/// Expected: Err(AuthErr(MissingCredentials)), while the permissive policy passes with None
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(db, &identity, &headers);

    assert!(matches!(
        guard.require().await,
        Err(AppError::AuthErr(AuthError::MissingCredentials))
    ));
    assert!(guard.permissive().await?.is_none());

    Ok(())
}

/// Tests a credential signed with another secret.
///
/// Expected: Err(AuthErr(InvalidToken)) under both strict and permissive policies
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let user = factory::create_user(db).await?;
    let forged = IdentityProvider::new("someone-else", 1).issue(user.id)?;
    let headers = bearer(&forged);

    let guard = AuthGuard::new(db, &identity, &headers);

    assert!(matches!(
        guard.require().await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert!(matches!(
        guard.permissive().await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid credential whose user has been removed.
///
/// Expected: Err(AuthErr(InvalidToken))
#[tokio::test]
async fn rejects_credential_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = identity();

    let headers = bearer(&identity.issue(9_999)?);

    let result = AuthGuard::new(db, &identity, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
