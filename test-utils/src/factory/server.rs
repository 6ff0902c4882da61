//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db, owner.id, category.id)
///     .name("Speedrunners")
///     .description(Some("Any% only"))
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: i32,
    category_id: i32,
    description: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory owned by `owner_id` inside `category_id`.
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, category_id: i32) -> Self {
        Self {
            db,
            name: format!("Server {}", next_id()),
            owner_id,
            category_id,
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            category_id: ActiveValue::Set(self.category_id),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(
    db: &DatabaseConnection,
    owner_id: i32,
    category_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, owner_id, category_id).build().await
}
