//! Request and response bodies

pub mod auth;
pub mod visitor;

pub use auth::{ChangePasswordRequest, LoginRequest, LoginResponse, VerifyRequest, VerifyResponse};
pub use visitor::AddVisitorAccessRequest;
