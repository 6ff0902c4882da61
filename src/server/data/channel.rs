//! Channel data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a channel without icon or banner.
    ///
    /// The name is stored as given; lower-casing is the caller's concern.
    pub async fn create(
        &self,
        server_id: i32,
        owner_id: i32,
        name: String,
        topic: String,
    ) -> Result<entity::channel::Model, DbErr> {
        entity::channel::ActiveModel {
            name: ActiveValue::Set(name),
            owner_id: ActiveValue::Set(owner_id),
            topic: ActiveValue::Set(topic),
            server_id: ActiveValue::Set(server_id),
            banner: ActiveValue::Set(None),
            icon: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::channel::Model>, DbErr> {
        entity::prelude::Channel::find_by_id(id).one(self.db).await
    }

    /// Gets the channels of a server ordered by id
    pub async fn get_by_server(&self, server_id: i32) -> Result<Vec<entity::channel::Model>, DbErr> {
        entity::prelude::Channel::find()
            .filter(entity::channel::Column::ServerId.eq(server_id))
            .order_by_asc(entity::channel::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the channels of every server in a category ordered by id
    pub async fn get_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::channel::Model>, DbErr> {
        entity::prelude::Channel::find()
            .inner_join(entity::prelude::Server)
            .filter(entity::server::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::channel::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes every mutable column of `channel` to its row.
    ///
    /// Owner and server never change after creation.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The stored channel
    /// - `Ok(None)` - The row no longer exists
    pub async fn update(
        &self,
        channel: entity::channel::Model,
    ) -> Result<Option<entity::channel::Model>, DbErr> {
        let result = entity::channel::ActiveModel {
            id: ActiveValue::Unchanged(channel.id),
            name: ActiveValue::Set(channel.name),
            owner_id: ActiveValue::Unchanged(channel.owner_id),
            topic: ActiveValue::Set(channel.topic),
            server_id: ActiveValue::Unchanged(channel.server_id),
            banner: ActiveValue::Set(channel.banner),
            icon: ActiveValue::Set(channel.icon),
        }
        .update(self.db)
        .await;

        match result {
            Ok(channel) => Ok(Some(channel)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes a channel by id
    ///
    /// # Returns
    /// - `Ok(true)` - Channel deleted
    /// - `Ok(false)` - No channel with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Channel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
