//! Category domain models and parameters.
//!
//! Categories group servers and may carry an icon. The icon column holds a storage key;
//! the DTO exposes it as a URL under the media prefix.

use crate::{
    model::category::CategoryDto,
    server::{
        media::path::media_url,
        model::media::{FileUpdate, UploadedFile},
    },
};

/// Category with its optional icon key.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Storage key of the icon, relative to the media root.
    pub icon: Option<String>,
}

impl Category {
    /// Converts the category domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `CategoryDto` - DTO with the icon key turned into a public URL
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon.as_deref().map(media_url),
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
        }
    }
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<UploadedFile>,
}

/// Parameters for updating a category.
///
/// `None` text fields keep their stored value. An empty description clears it.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: FileUpdate,
}
