use super::*;

/// Tests that channel names are stored lower-cased.
///
/// Expected: "General" stored as "general"
#[tokio::test]
async fn lowercases_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let channel = ChannelService::new(db, &storage)
        .create(create_params(server.id, "General"), &caller(&owner))
        .await?;

    assert_eq!(channel.name, "general");
    let stored = entity::prelude::Channel::find_by_id(channel.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "general");
    assert_eq!(stored.owner_id, owner.id);

    Ok(())
}

/// Tests creating a channel with icon and banner.
///
/// Expected: both files stored under the new channel id
#[tokio::test]
async fn stores_uploads_under_new_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let channel = ChannelService::new(db, &storage)
        .create(
            CreateChannelParams {
                icon: Some(png_upload("icon.png", 48, 48)),
                banner: Some(png_upload("wide banner.png", 600, 100)),
                ..create_params(server.id, "media")
            },
            &caller(&owner),
        )
        .await?;

    let icon_key = format!("channel/{}/channel_icon/icon.png", channel.id);
    let banner_key = format!("channel/{}/channel_banner/wide_banner.png", channel.id);
    assert_eq!(channel.icon.as_deref(), Some(icon_key.as_str()));
    assert_eq!(channel.banner.as_deref(), Some(banner_key.as_str()));
    assert!(storage.contains(&icon_key).await);
    assert!(storage.contains(&banner_key).await);

    Ok(())
}

/// Tests icon dimension limits on create.
///
/// Expected: 80x80 rejected, 70x70 and 60x80 accepted
#[tokio::test]
async fn validates_icon_dimensions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let service = ChannelService::new(db, &storage);

    let result = service
        .create(
            CreateChannelParams {
                icon: Some(png_upload("big.png", 80, 80)),
                ..create_params(server.id, "big")
            },
            &caller(&owner),
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::IconTooLarge {
            width: 80,
            height: 80
        }))
    ));
    assert!(entity::prelude::Channel::find().all(db).await?.is_empty());

    for (width, height) in [(70, 70), (60, 80)] {
        let created = service
            .create(
                CreateChannelParams {
                    icon: Some(png_upload("ok.png", width, height)),
                    ..create_params(server.id, "ok")
                },
                &caller(&owner),
            )
            .await;
        assert!(created.is_ok(), "{width}x{height}");
    }

    Ok(())
}

/// Tests banner extension validation.
///
/// Expected: `.bmp` and `.PNG` banners rejected
#[tokio::test]
async fn rejects_unsupported_banner_extension() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let service = ChannelService::new(db, &storage);

    for filename in ["photo.bmp", "photo.PNG"] {
        let result = service
            .create(
                CreateChannelParams {
                    banner: Some(UploadedFile::new(filename, vec![0; 4])),
                    ..create_params(server.id, "banners")
                },
                &caller(&owner),
            )
            .await;

        assert!(
            matches!(
                result,
                Err(AppError::ValidationErr(ValidationError::UnsupportedExtension))
            ),
            "{filename}"
        );
    }

    Ok(())
}

/// Tests adding a channel to someone else's server.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_owner_of_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (_owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let stranger = factory::create_account(db).await?;

    let result = ChannelService::new(db, &storage)
        .create(create_params(server.id, "intruders"), &caller(&stranger))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}
