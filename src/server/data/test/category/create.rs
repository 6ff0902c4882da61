use super::*;

/// Tests creating a category.
///
/// Expected: Ok with a stored row and no icon yet
#[tokio::test]
async fn creates_category_without_icon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_server_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db)
        .create("Gaming".to_string(), Some("Games of all kinds".to_string()))
        .await?;

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Gaming");
    assert_eq!(stored.description.as_deref(), Some("Games of all kinds"));
    assert!(stored.icon.is_none());

    Ok(())
}
