use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a category without an icon. The icon key depends on the new id.
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            icon: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Gets all categories ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Writes every column of `category` to its row.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The stored category
    /// - `Ok(None)` - The row no longer exists
    pub async fn update(
        &self,
        category: entity::category::Model,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let result = entity::category::ActiveModel {
            id: ActiveValue::Unchanged(category.id),
            name: ActiveValue::Set(category.name),
            description: ActiveValue::Set(category.description),
            icon: ActiveValue::Set(category.icon),
        }
        .update(self.db)
        .await;

        match result {
            Ok(category) => Ok(Some(category)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Deletes a category together with its servers, their channels and memberships.
    ///
    /// All rows are removed in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with this id
    /// - `Err(DbErr)` - Database error, nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let server_ids: Vec<i32> = entity::prelude::Server::find()
            .select_only()
            .column(entity::server::Column::Id)
            .filter(entity::server::Column::CategoryId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !server_ids.is_empty() {
            entity::prelude::Channel::delete_many()
                .filter(entity::channel::Column::ServerId.is_in(server_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::ServerMember::delete_many()
                .filter(entity::server_member::Column::ServerId.is_in(server_ids.clone()))
                .exec(&txn)
                .await?;

            entity::prelude::Server::delete_many()
                .filter(entity::server::Column::Id.is_in(server_ids))
                .exec(&txn)
                .await?;
        }

        let result = entity::prelude::Category::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
