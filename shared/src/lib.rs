//! Shared utilities and common types for the resume API server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The uniform `{success, message, data}` response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtSchemeConfig,
    ServerConfig,
};
pub use types::ApiResponse;
