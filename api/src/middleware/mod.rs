//! Request middleware

pub mod auth;

pub use auth::{AdminContext, BearerAuth, RequireAdmin, VisitorContext};
