use super::*;

/// Expected: Ok with the channel stored as given and without files
#[tokio::test]
async fn creates_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let channel = ChannelRepository::new(db)
        .create(server.id, owner.id, "general".to_string(), "Chat".to_string())
        .await?;

    let stored = entity::prelude::Channel::find_by_id(channel.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "general");
    assert_eq!(stored.topic, "Chat");
    assert_eq!(stored.server_id, server.id);
    assert_eq!(stored.owner_id, owner.id);
    assert!(stored.icon.is_none());
    assert!(stored.banner.is_none());

    Ok(())
}
