//! Mock implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::profile::{Profile, ProfileField};
use crate::errors::DomainError;

use super::trait_::ProfileRepository;

#[derive(Default)]
pub struct MockProfileRepository {
    profile: Arc<RwLock<Option<Profile>>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(Some(profile))),
        }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn get(&self) -> Result<Option<Profile>, DomainError> {
        Ok(self.profile.read().await.clone())
    }

    async fn upsert(&self, mut profile: Profile) -> Result<Profile, DomainError> {
        let mut stored = self.profile.write().await;
        profile.id = stored.as_ref().map(|p| p.id).unwrap_or(1);
        *stored = Some(profile.clone());
        Ok(profile)
    }

    async fn field_matches(&self, field: ProfileField, value: &str) -> Result<bool, DomainError> {
        let stored = self.profile.read().await;
        Ok(stored
            .as_ref()
            .map(|p| field.value_of(p) == value)
            .unwrap_or(false))
    }
}
