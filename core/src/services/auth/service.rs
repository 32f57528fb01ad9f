//! Main authentication service implementation

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AdminRepository;
use crate::services::token::AdminTokenScheme;

use super::config::{AuthServiceConfig, MIN_PASSWORD_LENGTH};
use super::password::{hash_password, verify_password};

/// Authentication service for administrator accounts
pub struct AuthService<A: AdminRepository + ?Sized> {
    /// Account storage
    admin_repository: Arc<A>,
    /// Admin session token scheme
    token_scheme: Arc<AdminTokenScheme>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<A: AdminRepository + ?Sized> AuthService<A> {
    pub fn new(
        admin_repository: Arc<A>,
        token_scheme: Arc<AdminTokenScheme>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            admin_repository,
            token_scheme,
            config,
        }
    }

    /// Exchange a username and password for an admin session token.
    ///
    /// Unknown usernames and wrong passwords fail with the same
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<String> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::validation("username and password are required"));
        }

        let account = match self.admin_repository.find_by_username(username).await? {
            Some(account) => account,
            None => {
                tracing::info!("Admin login failed: unknown account");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, &account.password_hash).await? {
            tracing::info!(user_id = account.id, "Admin login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_scheme.issue(&account)?;
        tracing::info!(user_id = account.id, "Admin logged in");

        Ok(token)
    }

    /// Change the password of the account identified by `user_id`.
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if current_password.is_empty() {
            return Err(DomainError::validation("current password is required"));
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "new password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let account = self
            .admin_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        if !verify_password(current_password, &account.password_hash).await? {
            tracing::info!(user_id, "Password change rejected: current password mismatch");
            return Err(AuthError::IncorrectCurrentPassword.into());
        }

        let new_hash = hash_password(new_password, self.config.bcrypt_cost).await?;

        if !self
            .admin_repository
            .update_password_hash(user_id, &new_hash)
            .await?
        {
            return Err(DomainError::not_found("user"));
        }

        tracing::info!(user_id, "Admin password changed");
        Ok(())
    }
}
