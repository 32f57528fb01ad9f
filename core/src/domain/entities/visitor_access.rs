//! Visitor access entries: the secrets a visitor can present to obtain a token.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::ProfileField;

/// How a visitor proves knowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Name,
    Email,
    Phone,
    Password,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }

    /// The profile field this type is checked against, if any.
    ///
    /// `Password` is checked against the visitor access table instead.
    pub fn profile_field(&self) -> Option<ProfileField> {
        match self {
            Self::Name => Some(ProfileField::Name),
            Self::Email => Some(ProfileField::Email),
            Self::Phone => Some(ProfileField::Phone),
            Self::Password => None,
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "password" => Ok(Self::Password),
            other => Err(format!("unknown access type: {}", other)),
        }
    }
}

/// A stored visitor access entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorAccessEntry {
    pub id: i64,
    pub access_type: AccessType,
    pub value: String,
    pub access_key: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a visitor access entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitorAccess {
    pub access_type: AccessType,
    pub value: String,
    pub access_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_access_type() {
        assert_eq!("password".parse::<AccessType>(), Ok(AccessType::Password));
        assert_eq!("email".parse::<AccessType>(), Ok(AccessType::Email));
        assert!("Password".parse::<AccessType>().is_err());
        assert!("fingerprint".parse::<AccessType>().is_err());
    }

    #[test]
    fn test_profile_field_mapping() {
        assert_eq!(AccessType::Name.profile_field(), Some(ProfileField::Name));
        assert_eq!(AccessType::Password.profile_field(), None);
    }
}
