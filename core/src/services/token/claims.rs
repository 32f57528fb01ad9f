//! Per-scheme claim predicates

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::entities::token::{AdminClaims, VisitorClaims, VISITOR_TOKEN_TYPE};
use crate::errors::TokenError;

/// A claim set that can be carried by a [`super::TokenScheme`].
pub trait SchemeClaims: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Scheme name for log lines
    const SCHEME: &'static str;

    /// Expiration as a unix timestamp
    fn expires_at(&self) -> i64;

    /// Required-claim check applied after signature verification
    fn check(&self, issuer: &str) -> Result<(), TokenError>;
}

impl SchemeClaims for AdminClaims {
    const SCHEME: &'static str = "admin";

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn check(&self, issuer: &str) -> Result<(), TokenError> {
        if self.iss != issuer || self.username.is_empty() {
            return Err(TokenError::InvalidClaims);
        }
        Ok(())
    }
}

impl SchemeClaims for VisitorClaims {
    const SCHEME: &'static str = "visitor";

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn check(&self, _issuer: &str) -> Result<(), TokenError> {
        if self.token_type != VISITOR_TOKEN_TYPE || self.access_key.is_empty() {
            return Err(TokenError::InvalidClaims);
        }
        Ok(())
    }
}
