//! Membership factory linking accounts to servers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds `account_id` to the member set of `server_id`.
pub async fn add_member(
    db: &DatabaseConnection,
    server_id: i32,
    account_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        account_id: ActiveValue::Set(account_id),
    }
    .insert(db)
    .await
}

/// Adds every account in `account_ids` to the member set of `server_id`.
pub async fn add_members(
    db: &DatabaseConnection,
    server_id: i32,
    account_ids: &[i32],
) -> Result<(), DbErr> {
    for account_id in account_ids {
        add_member(db, server_id, *account_id).await?;
    }

    Ok(())
}
