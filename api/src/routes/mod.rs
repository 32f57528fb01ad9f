//! Route handlers
//!
//! - `auth` - admin login and visitor verification (unauthenticated)
//! - `admin` - account settings and visitor access management
//! - `content` - profile and the four list resources, shared by the admin
//!   and visitor scopes

pub mod admin;
pub mod auth;
pub mod content;
