use super::*;

/// Tests deleting a category with servers, channels and members.
///
/// Verifies that the whole tree below the category is removed in one go and that
/// rows of other categories survive.
///
/// Expected: Ok(true), only the other category's rows remain
#[tokio::test]
async fn deletes_category_with_servers_and_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_account(db).await?;
    let doomed = factory::create_category(db).await?;
    let kept = factory::create_category(db).await?;

    for _ in 0..2 {
        let server = factory::create_server(db, owner.id, doomed.id).await?;
        factory::create_channel(db, owner.id, server.id).await?;
        factory::add_member(db, server.id, owner.id).await?;
    }
    let survivor = factory::create_server(db, owner.id, kept.id).await?;
    factory::create_channel(db, owner.id, survivor.id).await?;
    factory::add_member(db, survivor.id, owner.id).await?;

    let deleted = CategoryRepository::new(db).delete(doomed.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Category::find_by_id(doomed.id)
        .one(db)
        .await?
        .is_none());
    let servers = entity::prelude::Server::find().all(db).await?;
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, survivor.id);
    assert_eq!(entity::prelude::Channel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ServerMember::find().count(db).await?, 1);

    Ok(())
}

/// Expected: Ok(true) for a category without servers
#[tokio::test]
async fn deletes_empty_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    assert!(CategoryRepository::new(db).delete(category.id).await?);
    assert!(!CategoryRepository::new(db).delete(category.id).await?);

    Ok(())
}
