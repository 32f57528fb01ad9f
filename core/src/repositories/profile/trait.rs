//! Profile persistence interface.

use async_trait::async_trait;

use crate::domain::entities::profile::{Profile, ProfileField};
use crate::errors::DomainError;

/// There is at most one profile row; the repository hides its id.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Profile>, DomainError>;

    /// Update the existing profile, or insert it if there is none.
    async fn upsert(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Whether the stored profile's `field` equals `value` exactly
    async fn field_matches(&self, field: ProfileField, value: &str) -> Result<bool, DomainError>;
}
