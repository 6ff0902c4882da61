use super::*;

/// Expected: Ok with the server stored under the given owner and category
#[tokio::test]
async fn creates_server() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_account(db).await?;
    let category = factory::create_category(db).await?;

    let server = ServerRepository::new(db)
        .create(CreateServerParams {
            owner_id: owner.id,
            category_id: category.id,
            name: "Rustaceans".to_string(),
            description: Some("Systems talk".to_string()),
        })
        .await?;

    let stored = entity::prelude::Server::find_by_id(server.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Rustaceans");
    assert_eq!(stored.owner_id, owner.id);
    assert_eq!(stored.category_id, category.id);
    assert_eq!(stored.description.as_deref(), Some("Systems talk"));

    Ok(())
}
