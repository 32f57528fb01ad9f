use std::sync::Arc;

use crate::domain::entities::visitor_access::{AccessType, NewVisitorAccess, VisitorAccessEntry};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{ProfileRepository, VisitorAccessRepository};
use crate::services::token::VisitorTokenScheme;

/// Exchanges proof of knowledge for visitor session tokens
pub struct VisitorService<V, P>
where
    V: VisitorAccessRepository + ?Sized,
    P: ProfileRepository + ?Sized,
{
    access_repository: Arc<V>,
    profile_repository: Arc<P>,
    token_scheme: Arc<VisitorTokenScheme>,
}

impl<V, P> VisitorService<V, P>
where
    V: VisitorAccessRepository + ?Sized,
    P: ProfileRepository + ?Sized,
{
    pub fn new(
        access_repository: Arc<V>,
        profile_repository: Arc<P>,
        token_scheme: Arc<VisitorTokenScheme>,
    ) -> Self {
        Self {
            access_repository,
            profile_repository,
            token_scheme,
        }
    }

    /// Verify a visitor-supplied secret and issue a visitor token.
    ///
    /// * `password` is matched against the visitor access entries; the token
    ///   carries the entry's access key.
    /// * `name`, `email` and `phone` are matched exactly against the profile;
    ///   the token carries `"{type}_{value}"`.
    pub async fn verify(&self, verification_type: &str, value: &str) -> DomainResult<String> {
        let access_type = verification_type.parse::<AccessType>().map_err(|_| {
            AuthError::InvalidVerificationType {
                value: verification_type.to_string(),
            }
        })?;

        if value.is_empty() {
            return Err(AuthError::EmptyVerificationValue.into());
        }

        let access_key = match access_type.profile_field() {
            None => self
                .access_repository
                .find_access_key(access_type, value)
                .await?,
            Some(field) => {
                if self.profile_repository.field_matches(field, value).await? {
                    Some(format!("{}_{}", access_type, value))
                } else {
                    None
                }
            }
        };

        let Some(access_key) = access_key else {
            tracing::info!(verification_type = %access_type, "Visitor verification failed");
            return Err(AuthError::VerificationFailed.into());
        };

        let token = self.token_scheme.issue(&access_key)?;
        tracing::info!(verification_type = %access_type, "Visitor verified");

        Ok(token)
    }

    pub async fn list_access(&self) -> DomainResult<Vec<VisitorAccessEntry>> {
        self.access_repository.list().await
    }

    /// Add a visitor password. Only the `password` type can be managed.
    pub async fn add_access(&self, entry: NewVisitorAccess) -> DomainResult<VisitorAccessEntry> {
        if entry.access_type != AccessType::Password {
            return Err(DomainError::validation(
                "only password access entries can be added",
            ));
        }
        if entry.value.is_empty() || entry.access_key.is_empty() {
            return Err(DomainError::validation("value and access_key are required"));
        }

        let stored = self.access_repository.create(entry).await?;
        tracing::info!(id = stored.id, "Visitor access entry added");
        Ok(stored)
    }

    pub async fn delete_access(&self, id: i64) -> DomainResult<()> {
        if !self.access_repository.delete(id).await? {
            return Err(DomainError::not_found("visitor access entry"));
        }
        tracing::info!(id, "Visitor access entry deleted");
        Ok(())
    }
}
