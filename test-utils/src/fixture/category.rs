//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Gaming";

/// Default test category description.
pub const DEFAULT_DESCRIPTION: Option<&str> = None;

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Gaming"`
/// - description: `None`
/// - icon: `None`
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    icon: Option<String>,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.map(str::to_string),
            icon: None,
        }
    }
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Sets the stored icon key.
    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(str::to_string);
        self
    }

    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}
