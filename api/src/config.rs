//! Configuration loading for the server binary

use resume_shared::{AppConfig, ConfigError};

/// Build the configuration from the process environment and validate it.
///
/// The binary loads `.env` before calling this.
pub fn load() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::from_env();
    config.validate()?;

    if config.database.is_in_memory() {
        log::warn!("Using an in-memory database; all data is lost on shutdown");
    }

    Ok(config)
}
