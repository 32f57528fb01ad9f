//! Mock implementation of VisitorAccessRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::visitor_access::{AccessType, NewVisitorAccess, VisitorAccessEntry};
use crate::errors::DomainError;

use super::trait_::VisitorAccessRepository;

/// Mock visitor access repository for testing
pub struct MockVisitorAccessRepository {
    entries: Arc<RwLock<HashMap<i64, VisitorAccessEntry>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockVisitorAccessRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Repository seeded with the default password entry
    /// (`default_password` → `visitor_key`)
    pub async fn with_default_password() -> Self {
        let repo = Self::new();
        // The store is empty, so the insert cannot collide.
        let _ = repo
            .create(NewVisitorAccess {
                access_type: AccessType::Password,
                value: "default_password".to_string(),
                access_key: "visitor_key".to_string(),
            })
            .await;
        repo
    }
}

impl Default for MockVisitorAccessRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitorAccessRepository for MockVisitorAccessRepository {
    async fn find_access_key(
        &self,
        access_type: AccessType,
        value: &str,
    ) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .find(|e| e.access_type == access_type && e.value == value)
            .map(|e| e.access_key.clone()))
    }

    async fn list(&self) -> Result<Vec<VisitorAccessEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut list: Vec<_> = entries.values().cloned().collect();
        list.sort_by_key(|e| e.id);
        Ok(list)
    }

    async fn create(&self, entry: NewVisitorAccess) -> Result<VisitorAccessEntry, DomainError> {
        let mut entries = self.entries.write().await;

        if entries
            .values()
            .any(|e| e.access_type == entry.access_type && e.value == entry.value)
        {
            return Err(DomainError::Validation {
                message: "visitor access entry already exists".to_string(),
            });
        }

        let mut next_id = self.next_id.write().await;
        let stored = VisitorAccessEntry {
            id: *next_id,
            access_type: entry.access_type,
            value: entry.value,
            access_key: entry.access_key,
            created_at: Utc::now(),
        };
        *next_id += 1;

        entries.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&id).is_some())
    }
}
