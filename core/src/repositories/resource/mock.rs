//! In-memory implementations of the content repositories

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::resource::Resource;
use crate::domain::entities::skill::{Skill, SkillCategory};
use crate::errors::DomainError;

use super::trait_::{ResourceRepository, SkillCategoryRepository};

/// In-memory repository for any [`Resource`]
pub struct InMemoryResourceRepository<R: Resource> {
    records: Arc<RwLock<HashMap<i64, R>>>,
    next_id: Arc<RwLock<i64>>,
}

impl<R: Resource> InMemoryResourceRepository<R> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Repository pre-filled with records; their ids are kept as given.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let map: HashMap<i64, R> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = map.keys().max().copied().unwrap_or(0) + 1;
        Self {
            records: Arc::new(RwLock::new(map)),
            next_id: Arc::new(RwLock::new(next_id)),
        }
    }
}

impl<R: Resource> Default for InMemoryResourceRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryResourceRepository<R> {
    async fn list(&self) -> Result<Vec<R>, DomainError> {
        let records = self.records.read().await;
        let mut list: Vec<R> = records.values().cloned().collect();
        list.sort_by_key(|r| (r.sort_order(), r.id()));
        Ok(list)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn create(&self, mut record: R) -> Result<R, DomainError> {
        let mut records = self.records.write().await;
        let mut next_id = self.next_id.write().await;

        record.set_id(*next_id);
        *next_id += 1;

        records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: R) -> Result<Option<R>, DomainError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return Ok(None);
        }

        record.set_id(id);
        records.insert(id, record.clone());
        Ok(Some(record))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}

/// Mock skill repository: skills by id plus a fixed set of categories
pub struct MockSkillRepository {
    skills: InMemoryResourceRepository<Skill>,
    categories: Arc<RwLock<Vec<SkillCategory>>>,
}

impl MockSkillRepository {
    pub fn new() -> Self {
        Self {
            skills: InMemoryResourceRepository::new(),
            categories: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Seed categories; any skills nested in them are moved into the skill store.
    pub fn with_categories(categories: Vec<SkillCategory>) -> Self {
        let mut skills = Vec::new();
        let categories = categories
            .into_iter()
            .map(|mut category| {
                skills.append(&mut category.skills);
                category
            })
            .collect();

        Self {
            skills: InMemoryResourceRepository::with_records(skills),
            categories: Arc::new(RwLock::new(categories)),
        }
    }
}

impl Default for MockSkillRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceRepository<Skill> for MockSkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        self.skills.list().await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Skill>, DomainError> {
        self.skills.find_by_id(id).await
    }

    async fn create(&self, record: Skill) -> Result<Skill, DomainError> {
        self.skills.create(record).await
    }

    async fn update(&self, id: i64, record: Skill) -> Result<Option<Skill>, DomainError> {
        self.skills.update(id, record).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.skills.delete(id).await
    }
}

#[async_trait]
impl SkillCategoryRepository for MockSkillRepository {
    async fn list_categories(&self) -> Result<Vec<SkillCategory>, DomainError> {
        let skills = self.skills.list().await?;
        let mut categories = self.categories.read().await.clone();
        categories.sort_by_key(|c| c.id);

        for category in categories.iter_mut() {
            category.skills = skills
                .iter()
                .filter(|s| s.category_id == category.id)
                .cloned()
                .collect();
        }

        Ok(categories)
    }
}
