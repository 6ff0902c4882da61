//! Channel fixtures for creating in-memory test data.

use entity::channel;

/// Default test channel name, already lower-cased as stored.
pub const DEFAULT_NAME: &str = "general";

/// Default test channel topic.
pub const DEFAULT_TOPIC: &str = "Anything goes";

/// Creates a channel entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"general"`
/// - owner_id: `1`
/// - topic: `"Anything goes"`
/// - server_id: `1`
/// - banner / icon: `None`
pub fn entity() -> channel::Model {
    entity_builder().build()
}

/// Creates a channel entity builder for customization.
pub fn entity_builder() -> ChannelEntityBuilder {
    ChannelEntityBuilder::default()
}

/// Builder for creating customized channel entity models.
pub struct ChannelEntityBuilder {
    id: i32,
    name: String,
    owner_id: i32,
    topic: String,
    server_id: i32,
    banner: Option<String>,
    icon: Option<String>,
}

impl Default for ChannelEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            owner_id: 1,
            topic: DEFAULT_TOPIC.to_string(),
            server_id: 1,
            banner: None,
            icon: None,
        }
    }
}

impl ChannelEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn server_id(mut self, server_id: i32) -> Self {
        self.server_id = server_id;
        self
    }

    /// Sets the stored banner key.
    pub fn banner(mut self, banner: Option<&str>) -> Self {
        self.banner = banner.map(str::to_string);
        self
    }

    /// Sets the stored icon key.
    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(str::to_string);
        self
    }

    pub fn build(self) -> channel::Model {
        channel::Model {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            topic: self.topic,
            server_id: self.server_id,
            banner: self.banner,
            icon: self.icon,
        }
    }
}
