//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with its owner account and category.
///
/// # Returns
/// - `Ok((owner, category, server))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::category::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::account::create_account(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db, owner.id, category.id).await?;

    Ok((owner, category, server))
}

/// Creates a channel together with its server, the server's owner and category.
///
/// The server owner also owns the channel.
pub async fn create_channel_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::server::Model,
        entity::channel::Model,
    ),
    DbErr,
> {
    let (owner, _category, server) = create_server_with_dependencies(db).await?;
    let channel = crate::factory::channel::create_channel(db, owner.id, server.id).await?;

    Ok((owner, server, channel))
}
