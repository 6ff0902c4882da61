use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::account::Account,
};

pub enum Permission {
    Admin,
}

/// Resolves the caller's account from the session and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in account, if any.
    ///
    /// An id left in the session for an account that no longer exists counts as
    /// anonymous.
    pub async fn current_account(&self) -> Result<Option<Account>, AppError> {
        let Some(account_id) = AuthSession::new(self.session).get_account_id().await? else {
            return Ok(None);
        };

        let account = AccountRepository::new(self.db).find_by_id(account_id).await?;

        Ok(account)
    }

    /// Requires a logged-in account holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(Account)` - The caller
    /// - `Err(AuthError::AuthenticationFailed)` - Nobody is logged in
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let Some(account) = self.current_account().await? else {
            return Err(AuthError::AuthenticationFailed.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !account.admin {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            "Account attempted an admin-only operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }
}
