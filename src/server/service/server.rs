use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, channel::ChannelRepository, server::ServerRepository,
    },
    error::{auth::AuthError, validation::ValidationError, AppError},
    media::{lifecycle::MediaLifecycle, storage::MediaStorage},
    model::{
        account::Account,
        server::{CreateServerParams, Server, ServerFilter, ServerListQuery},
    },
    util::{
        parse::{parse_id, parse_quantity},
        text::{ensure_max_chars, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS},
    },
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn MediaStorage,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Lists servers for the listing endpoint.
    ///
    /// Filters apply in a fixed order, and a failing step stops the pipeline:
    ///
    /// 1. `category` - exact category name
    /// 2. `with_num_members` - annotate each server with its member count
    /// 3. `by_user` - servers the caller is a member of, requires a caller
    /// 4. `by_serverid` - the single server with that id, requires a caller and
    ///    the server to survive the previous filters
    /// 5. `qty` - keep at most this many servers in id order
    ///
    /// # Arguments
    /// - `query` - Normalized listing query
    /// - `caller_id` - Id of the logged-in account, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers, ascending by id
    /// - `Err(AuthError::AuthenticationFailed)` - `by_user` or `by_serverid` without caller
    /// - `Err(ValidationError::ServerNotFound)` - `by_serverid` matched nothing
    /// - `Err(ValidationError::ServerValue)` - `by_serverid` could not be applied
    /// - `Err(ValidationError::InvalidQuantity)` - `qty` is not a non-negative integer
    pub async fn list(
        &self,
        query: ServerListQuery,
        caller_id: Option<i32>,
    ) -> Result<Vec<Server>, AppError> {
        let repo = ServerRepository::new(self.db);

        let mut filter = ServerFilter {
            category: query.category,
            ..Default::default()
        };

        if query.by_user {
            let account_id = caller_id.ok_or(AuthError::AuthenticationFailed)?;
            filter.member_id = Some(account_id);
        }

        if let Some(raw_id) = query.by_serverid {
            if caller_id.is_none() {
                return Err(AuthError::AuthenticationFailed.into());
            }
            filter.server_id = Some(self.resolve_server_id(&repo, &filter, &raw_id).await?);
        }

        if let Some(raw_qty) = query.qty {
            filter.limit = Some(parse_quantity(&raw_qty)?);
        }

        let servers = repo.list(&filter).await?;

        let mut result = Vec::with_capacity(servers.len());
        for server in servers {
            let member_count = if query.with_num_members {
                Some(repo.count_members(server.id).await?)
            } else {
                None
            };

            result.push(Server::from_entity(server, member_count));
        }

        Ok(result)
    }

    /// Parses `raw_id` and checks that it survives `filter`.
    ///
    /// Anything other than a clean miss is reported as `ServerValue`; the cause is
    /// only logged.
    async fn resolve_server_id(
        &self,
        repo: &ServerRepository<'_>,
        filter: &ServerFilter,
        raw_id: &str,
    ) -> Result<i32, ValidationError> {
        let server_id = parse_id(raw_id).map_err(|e| {
            tracing::debug!("Rejected by_serverid value {:?}: {}", raw_id, e);
            ValidationError::ServerValue
        })?;

        let scoped = ServerFilter {
            server_id: Some(server_id),
            ..filter.clone()
        };

        match repo.exists(&scoped).await {
            Ok(true) => Ok(server_id),
            Ok(false) => Err(ValidationError::ServerNotFound(server_id)),
            Err(e) => {
                tracing::debug!("Failed to look up server {}: {}", server_id, e);
                Err(ValidationError::ServerValue)
            }
        }
    }

    /// Creates a server in an existing category.
    ///
    /// # Returns
    /// - `Ok(Server)` - The new server
    /// - `Err(ValidationError::TooLong)` - Name or description too long
    /// - `Err(AppError::NotFound)` - The category does not exist
    pub async fn create(&self, params: CreateServerParams) -> Result<Server, AppError> {
        ensure_max_chars("name", &params.name, NAME_MAX_CHARS)?;
        if let Some(description) = &params.description {
            ensure_max_chars("description", description, DESCRIPTION_MAX_CHARS)?;
        }

        let category = CategoryRepository::new(self.db)
            .find_by_id(params.category_id)
            .await?;
        if category.is_none() {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                params.category_id
            )));
        }

        let server = ServerRepository::new(self.db).create(params).await?;

        Ok(Server::from_entity(server, None))
    }

    /// Deletes a server, its channels and their files.
    ///
    /// Channel files are removed before the rows; the rows go in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Server deleted
    /// - `Err(AppError::NotFound)` - No server with this id
    /// - `Err(AuthError::AccessDenied)` - Caller neither owns the server nor is admin
    pub async fn delete(&self, server_id: i32, caller: &Account) -> Result<(), AppError> {
        let repo = ServerRepository::new(self.db);

        let server = self.find(&repo, server_id).await?;

        if !caller.can_manage(server.owner_id) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("Account is not allowed to delete server {}", server_id),
            )
            .into());
        }

        let lifecycle = MediaLifecycle::new(self.storage);
        for channel in ChannelRepository::new(self.db)
            .get_by_server(server_id)
            .await?
        {
            lifecycle.before_delete(&channel).await;
        }

        if !repo.delete(server_id).await? {
            return Err(not_found(server_id));
        }

        tracing::info!("Account {} deleted server {}", caller.id, server_id);

        Ok(())
    }

    /// Adds the caller to a server's members.
    ///
    /// # Returns
    /// - `Ok(true)` - Joined
    /// - `Ok(false)` - Already a member
    /// - `Err(AppError::NotFound)` - No server with this id
    pub async fn join(&self, server_id: i32, account_id: i32) -> Result<bool, AppError> {
        let repo = ServerRepository::new(self.db);

        self.find(&repo, server_id).await?;

        Ok(repo.add_member(server_id, account_id).await?)
    }

    /// Removes the caller from a server's members.
    ///
    /// # Returns
    /// - `Ok(true)` - Left
    /// - `Ok(false)` - Was not a member
    /// - `Err(AppError::NotFound)` - No server with this id
    pub async fn leave(&self, server_id: i32, account_id: i32) -> Result<bool, AppError> {
        let repo = ServerRepository::new(self.db);

        self.find(&repo, server_id).await?;

        Ok(repo.remove_member(server_id, account_id).await?)
    }

    async fn find(
        &self,
        repo: &ServerRepository<'_>,
        server_id: i32,
    ) -> Result<entity::server::Model, AppError> {
        repo.find_by_id(server_id)
            .await?
            .ok_or_else(|| not_found(server_id))
    }
}

fn not_found(server_id: i32) -> AppError {
    AppError::NotFound(format!("Server with id {} not found", server_id))
}
