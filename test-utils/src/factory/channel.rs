//! Channel factory for creating test channel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels with customizable fields.
///
/// Inserts rows directly, so no name lower-casing or file handling happens here.
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: i32,
    topic: String,
    server_id: i32,
    banner: Option<String>,
    icon: Option<String>,
}

impl<'a> ChannelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, server_id: i32) -> Self {
        Self {
            db,
            name: format!("channel-{}", next_id()),
            owner_id,
            topic: "General discussion".to_string(),
            server_id,
            banner: None,
            icon: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Sets the stored banner key. No blob is written.
    pub fn banner(mut self, banner: Option<&str>) -> Self {
        self.banner = banner.map(str::to_string);
        self
    }

    /// Sets the stored icon key. No blob is written.
    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(str::to_string);
        self
    }

    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        entity::channel::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            topic: ActiveValue::Set(self.topic),
            server_id: ActiveValue::Set(self.server_id),
            banner: ActiveValue::Set(self.banner),
            icon: ActiveValue::Set(self.icon),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel with default values.
pub async fn create_channel(
    db: &DatabaseConnection,
    owner_id: i32,
    server_id: i32,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db, owner_id, server_id).build().await
}
