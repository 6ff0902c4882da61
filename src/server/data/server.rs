//! Server data repository for database operations.
//!
//! Besides CRUD this repository evaluates the listing filters. Filters compose onto one
//! `SELECT` over `server`, always ordered by ascending id so that truncation with a limit
//! keeps a stable prefix.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};

use crate::server::model::server::{CreateServerParams, ServerFilter};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the listing query for `filter`.
    ///
    /// - `category` joins `category` and matches its name exactly
    /// - `member_id` joins `server_member`; membership is a set so no row repeats
    /// - `server_id` matches the primary key
    /// - `limit` truncates after ordering
    fn filtered(&self, filter: &ServerFilter) -> Select<entity::server::Entity> {
        let mut query = entity::prelude::Server::find();

        if let Some(category) = &filter.category {
            query = query
                .inner_join(entity::prelude::Category)
                .filter(entity::category::Column::Name.eq(category.as_str()));
        }

        if let Some(member_id) = filter.member_id {
            query = query
                .inner_join(entity::prelude::ServerMember)
                .filter(entity::server_member::Column::AccountId.eq(member_id));
        }

        if let Some(server_id) = filter.server_id {
            query = query.filter(entity::server::Column::Id.eq(server_id));
        }

        query
            .order_by_asc(entity::server::Column::Id)
            .limit(filter.limit)
    }

    /// Gets the servers matching `filter`, ordered by id
    pub async fn list(&self, filter: &ServerFilter) -> Result<Vec<entity::server::Model>, DbErr> {
        self.filtered(filter).all(self.db).await
    }

    /// Checks whether any server matches `filter`
    pub async fn exists(&self, filter: &ServerFilter) -> Result<bool, DbErr> {
        let count = self.filtered(filter).count(self.db).await?;

        Ok(count > 0)
    }

    /// Counts the members of a server. Servers without members count 0.
    pub async fn count_members(&self, server_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ServerMember::find()
            .filter(entity::server_member::Column::ServerId.eq(server_id))
            .count(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, params: CreateServerParams) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            name: ActiveValue::Set(params.name),
            owner_id: ActiveValue::Set(params.owner_id),
            category_id: ActiveValue::Set(params.category_id),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn is_member(&self, server_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::ServerMember::find_by_id((server_id, account_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// Adds an account to the member set of a server.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership created
    /// - `Ok(false)` - The account already was a member
    pub async fn add_member(&self, server_id: i32, account_id: i32) -> Result<bool, DbErr> {
        if self.is_member(server_id, account_id).await? {
            return Ok(false);
        }

        entity::server_member::ActiveModel {
            server_id: ActiveValue::Set(server_id),
            account_id: ActiveValue::Set(account_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes an account from the member set of a server.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - The account was not a member
    pub async fn remove_member(&self, server_id: i32, account_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ServerMember::delete_by_id((server_id, account_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a server together with its channels and memberships in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Server deleted
    /// - `Ok(false)` - No server with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Channel::delete_many()
            .filter(entity::channel::Column::ServerId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::ServerMember::delete_many()
            .filter(entity::server_member::Column::ServerId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Server::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
