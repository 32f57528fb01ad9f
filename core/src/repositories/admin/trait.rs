//! Administrator account persistence interface.

use async_trait::async_trait;

use crate::domain::entities::admin::AdminAccount;
use crate::errors::DomainError;

/// Repository trait for administrator accounts
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find an account by its exact username
    ///
    /// # Returns
    /// * `Ok(Some(AdminAccount))` - Account found
    /// * `Ok(None)` - No account with that username
    /// * `Err(DomainError)` - Store failure
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminAccount>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<AdminAccount>, DomainError>;

    /// Replace the stored password hash.
    ///
    /// Returns `false` when no account has the given id.
    async fn update_password_hash(&self, id: i64, password_hash: &str)
        -> Result<bool, DomainError>;
}
