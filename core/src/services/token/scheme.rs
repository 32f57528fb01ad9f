//! Generic HS256 token scheme

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use resume_shared::config::JwtSchemeConfig;

use crate::domain::entities::admin::AdminAccount;
use crate::domain::entities::token::{AdminClaims, VisitorClaims};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::Clock;

use super::claims::SchemeClaims;

/// Issues and verifies tokens carrying claims of type `C`
pub struct TokenScheme<C: SchemeClaims> {
    issuer: String,
    /// `None` when the configured hours do not fit a `Duration`
    lifetime: Option<Duration>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
    _claims: PhantomData<fn() -> C>,
}

pub type AdminTokenScheme = TokenScheme<AdminClaims>;
pub type VisitorTokenScheme = TokenScheme<VisitorClaims>;

impl<C: SchemeClaims> TokenScheme<C> {
    pub fn new(config: &JwtSchemeConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock in `verify`.
        validation.validate_exp = false;

        Self {
            issuer: config.issuer.clone(),
            lifetime: Duration::try_hours(config.expiry_hours),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            clock,
            _claims: PhantomData,
        }
    }

    /// Issue time and lifetime for a new token; fails when `now + lifetime` overflows
    fn issue_window(&self) -> Result<(DateTime<Utc>, Duration), DomainError> {
        let now = self.clock.now();
        self.lifetime
            .filter(|lifetime| now.checked_add_signed(*lifetime).is_some())
            .map(|lifetime| (now, lifetime))
            .ok_or_else(|| {
                tracing::error!(scheme = C::SCHEME, "Token lifetime out of range");
                DomainError::Token(TokenError::TokenGenerationFailed)
            })
    }

    /// Sign a claim set
    pub fn sign(&self, claims: &C) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(scheme = C::SCHEME, error = %e, "Failed to sign token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verify a token and return its claims
    ///
    /// # Returns
    ///
    /// * `Ok(C)` - Signature valid, `now < exp` and the claim predicate holds
    /// * `Err(DomainError::Token(_))` - Anything else
    pub fn verify(&self, token: &str) -> Result<C, DomainError> {
        let token_data = decode::<C>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            let reason = match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::InvalidClaims
                }
                _ => TokenError::InvalidTokenFormat,
            };
            tracing::debug!(scheme = C::SCHEME, reason = %reason, "Token rejected");
            DomainError::Token(reason)
        })?;

        let claims = token_data.claims;

        if self.clock.now().timestamp() >= claims.expires_at() {
            tracing::debug!(scheme = C::SCHEME, "Token rejected: expired");
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        claims.check(&self.issuer).map_err(|reason| {
            tracing::debug!(scheme = C::SCHEME, reason = %reason, "Token rejected");
            DomainError::Token(reason)
        })?;

        Ok(claims)
    }
}

impl TokenScheme<AdminClaims> {
    /// Issue a session token for an authenticated administrator
    pub fn issue(&self, account: &AdminAccount) -> Result<String, DomainError> {
        let (now, lifetime) = self.issue_window()?;
        let claims = AdminClaims::new(account, now, lifetime, self.issuer.clone());
        self.sign(&claims)
    }
}

impl TokenScheme<VisitorClaims> {
    /// Issue a session token bound to an access key
    pub fn issue(&self, access_key: &str) -> Result<String, DomainError> {
        let (now, lifetime) = self.issue_window()?;
        let claims = VisitorClaims::new(access_key, now, lifetime);
        self.sign(&claims)
    }
}
