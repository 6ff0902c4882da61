use super::*;

/// Tests resolving the caller without anything in the session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let account = AuthGuard::new(db, session).current_account().await?;

    assert!(account.is_none());

    Ok(())
}

/// Tests resolving the caller stored in the session.
///
/// Expected: Ok(Some(Account)) matching the stored id
#[tokio::test]
async fn returns_logged_in_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = factory::account::AccountFactory::new(db)
        .username("alice")
        .build()
        .await?;
    AuthSession::new(session).set_account_id(created.id).await?;

    let account = AuthGuard::new(db, session)
        .current_account()
        .await?
        .unwrap();

    assert_eq!(account.id, created.id);
    assert_eq!(account.username, "alice");

    Ok(())
}

/// Tests a session pointing at a removed account.
///
/// Expected: Ok(None), the stale id is treated as anonymous
#[tokio::test]
async fn ignores_stale_account_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_account_id(9999).await?;

    let account = AuthGuard::new(db, session).current_account().await?;

    assert!(account.is_none());

    Ok(())
}
