//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// Defaults are sourced from the category fixture with a unique name.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::category::entity_builder()
            .name(format!("Category {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.entity.description = description.map(str::to_string);
        self
    }

    /// Sets the stored icon key. No blob is written.
    pub fn icon(mut self, icon: Option<&str>) -> Self {
        self.entity.icon = icon.map(str::to_string);
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            icon: ActiveValue::Set(self.entity.icon),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates a category with the given name.
pub async fn create_category_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).name(name).build().await
}
