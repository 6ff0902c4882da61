use super::*;

/// Tests finding an existing account.
///
/// Expected: Ok(Some(Account)) with the stored fields
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::AccountFactory::new(db)
        .username("bob")
        .admin(true)
        .build()
        .await?;

    let account = AccountRepository::new(db).find_by_id(created.id).await?;

    let account = account.unwrap();
    assert_eq!(account.username, "bob");
    assert!(account.admin);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountRepository::new(db).find_by_id(404).await?;

    assert!(account.is_none());

    Ok(())
}
