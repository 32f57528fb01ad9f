//! Claim sets carried by the two bearer-token schemes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::admin::{AdminAccount, ADMIN_ROLE};

/// Issuer stamped into admin tokens
pub const JWT_ISSUER: &str = "resume-api";

/// Value of the `type` claim on visitor tokens
pub const VISITOR_TOKEN_TYPE: &str = "visitor";

/// Claims structure for admin session tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub user_id: i64,
    pub username: String,
    pub role: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl AdminClaims {
    pub fn new(
        account: &AdminAccount,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            user_id: account.id,
            username: account.username.clone(),
            role: account.role.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            iss: issuer.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Claims structure for visitor session tokens
///
/// A visitor token carries no user identity, only the access key that the
/// visitor proved knowledge of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorClaims {
    pub access_key: String,

    #[serde(rename = "type")]
    pub token_type: String,

    pub iat: i64,

    pub exp: i64,
}

impl VisitorClaims {
    pub fn new(access_key: impl Into<String>, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            access_key: access_key.into(),
            token_type: VISITOR_TOKEN_TYPE.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_admin_claims_window() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let account = AdminAccount::new(7, "admin", "hash", "admin");
        let claims = AdminClaims::new(&account, now, Duration::hours(24), JWT_ISSUER);

        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert_eq!(claims.iss, "resume-api");
    }

    #[test]
    fn test_visitor_claims_serialize_type_field() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = VisitorClaims::new("visitor_key", now, Duration::hours(24));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["type"], "visitor");
        assert_eq!(json["access_key"], "visitor_key");
        assert!(json.get("token_type").is_none());
    }
}
