use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Visitor proof of knowledge.
///
/// Both fields default to empty so that a missing field is reported the same
/// way as an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// One of `name`, `email`, `phone`, `password`
    #[serde(default)]
    pub verification_type: String,

    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, message = "new password must be at least 6 characters"))]
    pub new_password: String,
}
