//! Administrator authentication
//!
//! Username/password login, password change, and the bcrypt helpers both use.

mod config;
mod password;
mod service;


pub use config::{AuthServiceConfig, MIN_PASSWORD_LENGTH};
pub use password::{hash_password, verify_password};
pub use service::AuthService;
