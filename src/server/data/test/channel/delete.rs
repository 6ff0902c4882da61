use super::*;

/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _server, channel) = factory::helpers::create_channel_with_dependencies(db).await?;

    let repo = ChannelRepository::new(db);

    assert!(repo.delete(channel.id).await?);
    assert!(!repo.delete(channel.id).await?);
    assert!(entity::prelude::Channel::find_by_id(channel.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
