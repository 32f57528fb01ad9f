//! Authentication and authorization configuration
//!
//! The admin and visitor token schemes are configured independently. They must
//! never share a signing secret: a token from one scheme has to fail signature
//! verification in the other.

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Development fallback for the admin signing secret
pub const DEFAULT_ADMIN_SECRET: &str = "your-secret-key";

/// Development fallback for the visitor signing secret
pub const DEFAULT_VISITOR_SECRET: &str = "visitor_secret_key";

/// Issuer claim stamped into admin tokens
pub const DEFAULT_ISSUER: &str = "resume-api";

/// Token lifetime for both schemes
pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_EXPIRY_HOURS: i64 = 24 * 366;

/// Work factor used when hashing new admin passwords
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Configuration of one signed-token scheme
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtSchemeConfig {
    /// HMAC signing secret
    pub secret: String,

    /// Token lifetime in hours
    pub expiry_hours: i64,

    /// Issuer claim
    pub issuer: String,
}

impl JwtSchemeConfig {
    /// Create a scheme configuration with the default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours: DEFAULT_TOKEN_EXPIRY_HOURS,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    /// Set token lifetime in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.expiry_hours = hours;
        self
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Admin token scheme
    pub admin: JwtSchemeConfig,

    /// Visitor token scheme
    pub visitor: JwtSchemeConfig,

    /// bcrypt cost for newly stored password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Reject every mutating admin request with `Forbidden`
    #[serde(default)]
    pub read_only: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin: JwtSchemeConfig::new(DEFAULT_ADMIN_SECRET),
            visitor: JwtSchemeConfig::new(DEFAULT_VISITOR_SECRET),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            read_only: false,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let admin_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string());
        let visitor_secret = std::env::var("VISITOR_JWT_SECRET")
            .unwrap_or_else(|_| DEFAULT_VISITOR_SECRET.to_string());

        Self {
            admin: JwtSchemeConfig::new(admin_secret).with_expiry_hours(env_or(
                "ADMIN_TOKEN_EXPIRY_HOURS",
                DEFAULT_TOKEN_EXPIRY_HOURS,
            )),
            visitor: JwtSchemeConfig::new(visitor_secret).with_expiry_hours(env_or(
                "VISITOR_TOKEN_EXPIRY_HOURS",
                DEFAULT_TOKEN_EXPIRY_HOURS,
            )),
            bcrypt_cost: env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST),
            read_only: env_or("ADMIN_READ_ONLY", false),
        }
    }

    /// Check if either scheme still uses its development secret
    pub fn is_using_default_secrets(&self) -> bool {
        self.admin.secret == DEFAULT_ADMIN_SECRET || self.visitor.secret == DEFAULT_VISITOR_SECRET
    }

    /// Validate scheme isolation and lifetimes
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin.secret.is_empty() || self.visitor.secret.is_empty() {
            return Err(ConfigError::Invalid("token secrets must not be empty".to_string()));
        }
        if self.admin.secret == self.visitor.secret {
            return Err(ConfigError::Invalid(
                "admin and visitor token secrets must differ".to_string(),
            ));
        }
        for scheme in [&self.admin, &self.visitor] {
            if !(1..=MAX_TOKEN_EXPIRY_HOURS).contains(&scheme.expiry_hours) {
                return Err(ConfigError::Invalid(format!(
                    "token expiry of {} hours outside 1..={}",
                    scheme.expiry_hours, MAX_TOKEN_EXPIRY_HOURS
                )));
            }
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Invalid(format!(
                "bcrypt cost {} outside 4..=31",
                self.bcrypt_cost
            )));
        }
        Ok(())
    }
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AuthConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_using_default_secrets());
        assert_eq!(config.admin.expiry_hours, 24);
    }

    #[test]
    fn test_shared_secret_is_rejected() {
        let config = AuthConfig {
            admin: JwtSchemeConfig::new("same"),
            visitor: JwtSchemeConfig::new("same"),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_expiry_is_rejected() {
        let config = AuthConfig {
            admin: JwtSchemeConfig::new("a").with_expiry_hours(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_expiry_is_rejected() {
        let config = AuthConfig {
            visitor: JwtSchemeConfig::new("v").with_expiry_hours(10_000_000_000),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = AuthConfig {
            visitor: JwtSchemeConfig::new("v").with_expiry_hours(MAX_TOKEN_EXPIRY_HOURS),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
