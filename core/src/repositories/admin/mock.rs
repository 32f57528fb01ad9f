//! Mock implementation of AdminRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::admin::AdminAccount;
use crate::errors::DomainError;

use super::trait_::AdminRepository;

/// Mock admin repository for testing
pub struct MockAdminRepository {
    accounts: Arc<RwLock<HashMap<i64, AdminAccount>>>,
}

impl MockAdminRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository holding the given accounts
    pub fn with_accounts(accounts: impl IntoIterator<Item = AdminAccount>) -> Self {
        let map = accounts.into_iter().map(|a| (a.id, a)).collect();
        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn insert(&self, account: AdminAccount) {
        self.accounts.write().await.insert(account.id, account);
    }
}

impl Default for MockAdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminRepository for MockAdminRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AdminAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn update_password_hash(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&id) {
            Some(account) => {
                account.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
