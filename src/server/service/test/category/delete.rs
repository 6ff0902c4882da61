use super::*;

/// Tests deleting a category with an icon and channels carrying files.
///
/// Verifies that the category icon and the icon and banner of every channel in
/// every server of the category are deleted, while other categories' files stay.
///
/// Expected: Ok, exactly the owned files deleted
#[tokio::test]
async fn deletes_icon_and_channel_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let owner = factory::create_account(db).await?;
    let category = factory::category::CategoryFactory::new(db)
        .icon(Some("category/1/category_icon/c.png"))
        .build()
        .await?;
    let other = factory::category::CategoryFactory::new(db)
        .icon(Some("category/2/category_icon/o.png"))
        .build()
        .await?;
    let server = factory::create_server(db, owner.id, category.id).await?;
    factory::channel::ChannelFactory::new(db, owner.id, server.id)
        .icon(Some("channel/1/channel_icon/i.png"))
        .banner(Some("channel/1/channel_banner/b.png"))
        .build()
        .await?;
    let kept_server = factory::create_server(db, owner.id, other.id).await?;
    factory::channel::ChannelFactory::new(db, owner.id, kept_server.id)
        .icon(Some("channel/2/channel_icon/k.png"))
        .build()
        .await?;

    CategoryService::new(db, &storage).delete(category.id).await?;

    let mut deleted = storage.deleted().await;
    deleted.sort();
    assert_eq!(
        deleted,
        vec![
            "category/1/category_icon/c.png",
            "channel/1/channel_banner/b.png",
            "channel/1/channel_icon/i.png",
        ]
    );
    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Server::find_by_id(server.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Server::find_by_id(kept_server.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that storage failures do not block the delete.
///
/// Expected: Ok and the row removed although every file deletion failed
#[tokio::test]
async fn ignores_storage_failures() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::failing_deletes();

    let category = factory::category::CategoryFactory::new(db)
        .icon(Some("category/1/category_icon/c.png"))
        .build()
        .await?;

    CategoryService::new(db, &storage).delete(category.id).await?;

    assert_eq!(storage.deleted().await.len(), 1);
    assert!(entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Expected: Err(AppError::NotFound) for an unknown id
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let result = CategoryService::new(db, &storage).delete(8).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
