//! Resume content endpoints
//!
//! The same read handlers are mounted twice: under `/api/admin` behind the
//! admin token and under `/api` behind the visitor token. Write handlers only
//! exist in the admin scope.

pub mod profile;
pub mod resources;
pub mod skills;

pub use resources::{admin_resource_scope, visitor_resource_scope, ContentResource};
