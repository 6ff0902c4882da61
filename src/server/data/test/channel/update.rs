use super::*;

/// Tests writing a modified channel back.
///
/// Expected: name, topic and file keys replaced, owner and server unchanged
#[tokio::test]
async fn updates_mutable_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _server, mut channel) =
        factory::helpers::create_channel_with_dependencies(db).await?;

    channel.name = "announcements".to_string();
    channel.topic = "News".to_string();
    channel.icon = Some(format!("channel/{}/channel_icon/i.png", channel.id));
    channel.banner = Some(format!("channel/{}/channel_banner/b.png", channel.id));

    let updated = ChannelRepository::new(db).update(channel.clone()).await?;

    assert_eq!(updated, Some(channel));

    Ok(())
}

/// Tests writing back a channel whose row was deleted after it was read.
///
/// Expected: Ok(None), nothing recreated
#[tokio::test]
async fn returns_none_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _server, channel) =
        factory::helpers::create_channel_with_dependencies(db).await?;
    let repo = ChannelRepository::new(db);
    repo.delete(channel.id).await?;

    let result = repo.update(channel.clone()).await?;

    assert!(result.is_none());
    assert!(entity::prelude::Channel::find_by_id(channel.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
