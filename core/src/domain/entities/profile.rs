//! The single personal profile record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub introduction: String,
    pub years_of_exp: i64,
    pub education: String,
    pub job_status: String,
    pub philosophy: String,
    pub last_updated: Option<DateTime<Utc>>,
    pub resume_file_url: String,
}

/// Profile fields a visitor may verify against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
}

impl ProfileField {
    /// Read this field from a profile
    pub fn value_of<'a>(&self, profile: &'a Profile) -> &'a str {
        match self {
            Self::Name => &profile.name,
            Self::Email => &profile.email,
            Self::Phone => &profile.phone,
        }
    }
}
