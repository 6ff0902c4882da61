use super::*;

/// Tests requiring a login without one.
///
/// Expected: Err(AuthError::AuthenticationFailed)
#[tokio::test]
async fn fails_without_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationFailed))
    ));

    Ok(())
}

/// Expected: Ok(Account) for any logged-in account when no permission is listed
#[tokio::test]
async fn grants_plain_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let account = factory::create_account(db).await?;
    AuthSession::new(session).set_account_id(account.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(result.id, account.id);
    assert!(!result.admin);

    Ok(())
}

/// Tests admin permission check for an admin account.
///
/// Expected: Ok(Account) with admin=true
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::account::create_admin(db).await?;
    AuthSession::new(session).set_account_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.admin);

    Ok(())
}

/// Tests admin permission check for a regular account.
///
/// Expected: Err(AuthError::AccessDenied) naming the account
#[tokio::test]
async fn denies_admin_permission_to_regular_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let account = factory::create_account(db).await?;
    AuthSession::new(session).set_account_id(account.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == account.id
    ));

    Ok(())
}
