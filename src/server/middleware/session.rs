//! Type-safe session management wrappers.
//!
//! Logging in is handled by an external identity provider; this application only reads
//! the account id it finds in the session and clears the session on logout. Keeping the
//! key and its type in one place prevents typos across handlers.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key holding the authenticated account id.
pub(crate) const SESSION_AUTH_ACCOUNT_ID: &str = "auth:account";

/// Authentication session management.
///
/// Handles the authenticated account id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account id in the session.
    ///
    /// Logging in belongs to the identity provider fronting this service, so only tests
    /// write the id themselves.
    ///
    /// # Returns
    /// - `Ok(())` - Account id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg(test)]
    pub async fn set_account_id(&self, account_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_ACCOUNT_ID, account_id)
            .await?;
        Ok(())
    }

    /// Retrieves the account id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(account_id))` - An account is logged in
    /// - `Ok(None)` - No account in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_account_id(&self) -> Result<Option<i32>, AppError> {
        let account_id = self.session.get::<i32>(SESSION_AUTH_ACCOUNT_ID).await?;
        Ok(account_id)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
