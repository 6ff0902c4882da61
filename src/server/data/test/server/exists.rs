use super::*;

/// Expected: true when the id survives the other filters, false otherwise
#[tokio::test]
async fn respects_preceding_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_account(db).await?;
    let gaming = factory::category::create_category_named(db, "Gaming").await?;
    let server = factory::create_server(db, owner.id, gaming.id).await?;

    let repo = ServerRepository::new(db);

    assert!(
        repo.exists(&ServerFilter {
            server_id: Some(server.id),
            ..Default::default()
        })
        .await?
    );
    assert!(
        !repo
            .exists(&ServerFilter {
                category: Some("Music".to_string()),
                server_id: Some(server.id),
                ..Default::default()
            })
            .await?
    );
    assert!(
        !repo
            .exists(&ServerFilter {
                server_id: Some(server.id + 100),
                ..Default::default()
            })
            .await?
    );

    Ok(())
}
