use super::*;

/// Tests deleting a channel with icon and banner.
///
/// Expected: both files deleted and the row removed
#[tokio::test]
async fn deletes_channel_and_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let channel = factory::channel::ChannelFactory::new(db, owner.id, server.id)
        .icon(Some("channel/9/channel_icon/i.png"))
        .banner(Some("channel/9/channel_banner/b.png"))
        .build()
        .await?;

    ChannelService::new(db, &storage)
        .delete(channel.id, &caller(&owner))
        .await?;

    assert_eq!(
        storage.deleted().await,
        vec![
            "channel/9/channel_icon/i.png",
            "channel/9/channel_banner/b.png"
        ]
    );
    assert!(entity::prelude::Channel::find_by_id(channel.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Expected: Err(AppError::NotFound) for an unknown id
#[tokio::test]
async fn fails_for_unknown_channel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let admin = factory::account::create_admin(db).await?;

    let result = ChannelService::new(db, &storage)
        .delete(1234, &caller(&admin))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
