//! Channel business logic.
//!
//! Channel saves follow a fixed sequence: the name is lower-cased, uploads are validated,
//! and only then are previous files removed and new ones stored. Icons are checked for
//! size and extension, banners for extension only.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{channel::ChannelRepository, server::ServerRepository},
    error::{auth::AuthError, AppError},
    media::{
        lifecycle::MediaLifecycle,
        path::{channel_banner_path, channel_icon_path},
        storage::MediaStorage,
        validate::{validate_file_extension, validate_icon_size},
    },
    model::{
        account::Account,
        channel::{Channel, CreateChannelParams, UpdateChannelParams},
        media::{FileUpdate, UploadedFile},
    },
    util::text::{ensure_max_chars, NAME_MAX_CHARS, TOPIC_MAX_CHARS},
};

pub struct ChannelService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn MediaStorage,
}

impl<'a> ChannelService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Gets the channels of a server ordered by id
    pub async fn get_by_server(&self, server_id: i32) -> Result<Vec<Channel>, AppError> {
        let channels = ChannelRepository::new(self.db)
            .get_by_server(server_id)
            .await?;

        Ok(channels.into_iter().map(Channel::from_entity).collect())
    }

    /// Creates a channel in a server owned by the caller.
    ///
    /// The row is inserted first; uploaded files are stored under the new id afterwards.
    ///
    /// # Returns
    /// - `Ok(Channel)` - The new channel, owned by the caller
    /// - `Err(ValidationError)` - Text too long or an upload was rejected
    /// - `Err(AppError::NotFound)` - No server with this id
    /// - `Err(AuthError::AccessDenied)` - Caller neither owns the server nor is admin
    pub async fn create(
        &self,
        params: CreateChannelParams,
        caller: &Account,
    ) -> Result<Channel, AppError> {
        let name = params.name.to_lowercase();

        validate_text(Some(&name), Some(&params.topic))?;
        if let Some(icon) = &params.icon {
            validate_icon(icon)?;
        }
        if let Some(banner) = &params.banner {
            validate_banner(banner)?;
        }

        let server = ServerRepository::new(self.db)
            .find_by_id(params.server_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Server with id {} not found", params.server_id))
            })?;

        if !caller.can_manage(server.owner_id) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("Account is not allowed to add channels to server {}", server.id),
            )
            .into());
        }

        let repo = ChannelRepository::new(self.db);

        let mut channel = repo
            .create(server.id, caller.id, name, params.topic)
            .await?;

        if params.icon.is_none() && params.banner.is_none() {
            return Ok(Channel::from_entity(channel));
        }

        let lifecycle = MediaLifecycle::new(self.storage);
        if let Some(icon) = &params.icon {
            let key = channel_icon_path(channel.id, &icon.filename);
            channel.icon = Some(lifecycle.store(key, icon).await?);
        }
        if let Some(banner) = &params.banner {
            let key = channel_banner_path(channel.id, &banner.filename);
            channel.banner = Some(lifecycle.store(key, banner).await?);
        }

        let id = channel.id;
        let channel = repo.update(channel).await?.ok_or_else(|| not_found(id))?;

        Ok(Channel::from_entity(channel))
    }

    /// Updates a channel, replacing or clearing its icon and banner independently.
    ///
    /// # Returns
    /// - `Ok(Channel)` - The updated channel
    /// - `Err(ValidationError)` - Text too long or an upload was rejected
    /// - `Err(AppError::NotFound)` - No channel with this id
    /// - `Err(AuthError::AccessDenied)` - Caller neither owns the channel nor is admin
    pub async fn update(
        &self,
        params: UpdateChannelParams,
        caller: &Account,
    ) -> Result<Channel, AppError> {
        let name = params.name.map(|name| name.to_lowercase());

        validate_text(name.as_deref(), params.topic.as_deref())?;
        if let Some(icon) = params.icon.upload() {
            validate_icon(icon)?;
        }
        if let Some(banner) = params.banner.upload() {
            validate_banner(banner)?;
        }

        let repo = ChannelRepository::new(self.db);

        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        if !caller.can_manage(existing.owner_id) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("Account is not allowed to modify channel {}", existing.id),
            )
            .into());
        }

        let mut incoming = existing.clone();
        if let Some(name) = name {
            incoming.name = name;
        }
        if let Some(topic) = params.topic {
            incoming.topic = topic;
        }
        incoming.icon = next_key(&params.icon, existing.icon.clone(), |filename| {
            channel_icon_path(existing.id, filename)
        });
        incoming.banner = next_key(&params.banner, existing.banner.clone(), |filename| {
            channel_banner_path(existing.id, filename)
        });

        let lifecycle = MediaLifecycle::new(self.storage);
        lifecycle.before_save(&existing, &incoming).await;

        if let (FileUpdate::Replace(file), Some(key)) = (&params.icon, &incoming.icon) {
            lifecycle.store(key.clone(), file).await?;
        }
        if let (FileUpdate::Replace(file), Some(key)) = (&params.banner, &incoming.banner) {
            lifecycle.store(key.clone(), file).await?;
        }

        let channel = repo
            .update(incoming)
            .await?
            .ok_or_else(|| not_found(existing.id))?;

        Ok(Channel::from_entity(channel))
    }

    /// Deletes a channel and its files.
    ///
    /// # Returns
    /// - `Ok(())` - Channel deleted
    /// - `Err(AppError::NotFound)` - No channel with this id
    /// - `Err(AuthError::AccessDenied)` - Caller neither owns the channel nor is admin
    pub async fn delete(&self, id: i32, caller: &Account) -> Result<(), AppError> {
        let repo = ChannelRepository::new(self.db);

        let channel = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if !caller.can_manage(channel.owner_id) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("Account is not allowed to delete channel {}", id),
            )
            .into());
        }

        MediaLifecycle::new(self.storage)
            .before_delete(&channel)
            .await;

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn validate_text(name: Option<&str>, topic: Option<&str>) -> Result<(), AppError> {
    if let Some(name) = name {
        ensure_max_chars("name", name, NAME_MAX_CHARS)?;
    }
    if let Some(topic) = topic {
        ensure_max_chars("topic", topic, TOPIC_MAX_CHARS)?;
    }

    Ok(())
}

/// Size first, then extension.
fn validate_icon(icon: &UploadedFile) -> Result<(), AppError> {
    validate_icon_size(&icon.bytes)?;
    validate_file_extension(&icon.filename)?;

    Ok(())
}

fn validate_banner(banner: &UploadedFile) -> Result<(), AppError> {
    validate_file_extension(&banner.filename)?;

    Ok(())
}

/// Key a file column holds after applying `update`.
fn next_key(
    update: &FileUpdate,
    current: Option<String>,
    key_for: impl Fn(&str) -> String,
) -> Option<String> {
    match update {
        FileUpdate::Keep => current,
        FileUpdate::Clear => None,
        FileUpdate::Replace(file) => Some(key_for(&file.filename)),
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Channel with id {} not found", id))
}
