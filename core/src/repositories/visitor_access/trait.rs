//! Visitor access persistence interface.

use async_trait::async_trait;

use crate::domain::entities::visitor_access::{AccessType, NewVisitorAccess, VisitorAccessEntry};
use crate::errors::DomainError;

#[async_trait]
pub trait VisitorAccessRepository: Send + Sync {
    /// Look up the access key stored for an exact `(access_type, value)` pair
    async fn find_access_key(
        &self,
        access_type: AccessType,
        value: &str,
    ) -> Result<Option<String>, DomainError>;

    /// All entries, oldest first
    async fn list(&self) -> Result<Vec<VisitorAccessEntry>, DomainError>;

    /// Store a new entry.
    ///
    /// A duplicate `(access_type, value)` pair is a `DomainError::Validation`.
    async fn create(&self, entry: NewVisitorAccess) -> Result<VisitorAccessEntry, DomainError>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
