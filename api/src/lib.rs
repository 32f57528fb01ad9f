//! # Resume API
//!
//! actix-web front end for the resume content service: token endpoints,
//! bearer middleware for the admin and visitor schemes, and CRUD handlers.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::{AppState, Repositories};
