use super::*;

/// Tests counting members of servers with and without members.
///
/// Expected: the true member count, 0 for an empty server
#[tokio::test]
async fn counts_members_including_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, busy) = factory::helpers::create_server_with_dependencies(db).await?;
    let empty = factory::create_server(db, owner.id, category.id).await?;
    let a = factory::create_account(db).await?;
    let b = factory::create_account(db).await?;
    factory::add_members(db, busy.id, &[owner.id, a.id, b.id]).await?;

    let repo = ServerRepository::new(db);

    assert_eq!(repo.count_members(busy.id).await?, 3);
    assert_eq!(repo.count_members(empty.id).await?, 0);

    Ok(())
}
