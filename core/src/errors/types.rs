//! Error type definitions for authentication and token handling.

use thiserror::Error;

/// Outward-facing error classification.
///
/// The presentation layer maps each kind to exactly one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Internal,
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username and wrong password are deliberately the same variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Visitor verification failed")]
    VerificationFailed,

    #[error("Invalid verification type: {value}")]
    InvalidVerificationType { value: String },

    #[error("Verification value is empty")]
    EmptyVerificationValue,

    #[error("Current password is incorrect")]
    IncorrectCurrentPassword,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Modification disabled")]
    ModificationDisabled,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials
            | Self::VerificationFailed
            | Self::IncorrectCurrentPassword => ErrorKind::Unauthorized,
            Self::InvalidVerificationType { .. } | Self::EmptyVerificationValue => {
                ErrorKind::BadRequest
            }
            Self::InsufficientPermissions | Self::ModificationDisabled => ErrorKind::Forbidden,
        }
    }

    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "invalid credentials".to_string(),
            Self::VerificationFailed => "verification failed".to_string(),
            Self::InvalidVerificationType { .. } => "invalid verification type".to_string(),
            Self::EmptyVerificationValue => "verification value must not be empty".to_string(),
            Self::IncorrectCurrentPassword => "current password is incorrect".to_string(),
            Self::InsufficientPermissions => "insufficient permissions".to_string(),
            Self::ModificationDisabled => "modification is disabled".to_string(),
        }
    }
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Authorization header missing")]
    MissingToken,

    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TokenGenerationFailed => ErrorKind::Internal,
            _ => ErrorKind::Unauthorized,
        }
    }

    pub fn public_message(&self) -> String {
        match self {
            Self::MissingToken => "authorization required".to_string(),
            Self::MalformedHeader => "invalid authorization header".to_string(),
            Self::TokenExpired => "token expired".to_string(),
            Self::InvalidTokenFormat | Self::InvalidSignature | Self::InvalidClaims => {
                "invalid token".to_string()
            }
            Self::TokenGenerationFailed => "failed to generate token".to_string(),
        }
    }
}
