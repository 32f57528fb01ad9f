//! Persistence interface shared by the id-addressed content records
//! (skills, experiences, projects, certificates).

use async_trait::async_trait;

use crate::domain::entities::resource::Resource;
use crate::domain::entities::skill::SkillCategory;
use crate::errors::DomainError;

#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// All records ordered by `(sort_order, id)`
    async fn list(&self) -> Result<Vec<R>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, DomainError>;

    /// Insert a record; the incoming id is ignored and the assigned one returned.
    async fn create(&self, record: R) -> Result<R, DomainError>;

    /// Overwrite the record with the given id.
    ///
    /// # Returns
    /// * `Ok(Some(R))` - The stored record, carrying the path id
    /// * `Ok(None)` - No record has that id
    async fn update(&self, id: i64, record: R) -> Result<Option<R>, DomainError>;

    /// Returns `false` when nothing was deleted
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// Grouped view of skills for the public skill list
#[async_trait]
pub trait SkillCategoryRepository: Send + Sync {
    /// Categories ordered by id, each with its skills ordered by id
    async fn list_categories(&self) -> Result<Vec<SkillCategory>, DomainError>;
}
