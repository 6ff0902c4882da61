use super::*;

/// Tests joining and leaving a server.
///
/// Expected: membership reflected in the member count, repeated calls report no change
#[tokio::test]
async fn joins_and_leaves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (_owner, _category, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let account = factory::create_account(db).await?;

    let service = ServerService::new(db, &storage);

    assert!(service.join(server.id, account.id).await?);
    assert!(!service.join(server.id, account.id).await?);

    let listed = service
        .list(
            ServerListQuery {
                with_num_members: true,
                by_user: true,
                ..Default::default()
            },
            Some(account.id),
        )
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].member_count, Some(1));

    assert!(service.leave(server.id, account.id).await?);
    assert!(!service.leave(server.id, account.id).await?);

    Ok(())
}

/// Expected: Err(AppError::NotFound) when joining an unknown server
#[tokio::test]
async fn join_fails_for_unknown_server() -> Result<(), AppError> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let account = factory::create_account(db).await?;

    let result = ServerService::new(db, &storage).join(77, account.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
