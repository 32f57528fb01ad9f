//! Admin-only endpoints that are not content resources

pub mod settings;
pub mod visitor_access;
