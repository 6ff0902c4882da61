//! Channel domain models and parameters.

use crate::{
    model::channel::ChannelDto,
    server::{
        media::path::media_url,
        model::media::{FileUpdate, UploadedFile},
    },
};

/// Channel inside a server, with optional icon and banner keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i32,
    /// Always lower-case.
    pub name: String,
    pub owner_id: i32,
    pub topic: String,
    pub server_id: i32,
    pub banner: Option<String>,
    pub icon: Option<String>,
}

impl Channel {
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
            owner: self.owner_id,
            topic: self.topic,
            server: self.server_id,
            banner: self.banner.as_deref().map(media_url),
            icon: self.icon.as_deref().map(media_url),
        }
    }

    pub fn from_entity(entity: entity::channel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            topic: entity.topic,
            server_id: entity.server_id,
            banner: entity.banner,
            icon: entity.icon,
        }
    }
}

/// Parameters for creating a channel.
///
/// The caller becomes the owner.
#[derive(Debug, Clone)]
pub struct CreateChannelParams {
    pub server_id: i32,
    pub name: String,
    pub topic: String,
    pub icon: Option<UploadedFile>,
    pub banner: Option<UploadedFile>,
}

/// Parameters for updating a channel. `None` text fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateChannelParams {
    pub id: i32,
    pub name: Option<String>,
    pub topic: Option<String>,
    pub icon: FileUpdate,
    pub banner: FileUpdate,
}
