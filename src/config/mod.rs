mod client_settings;
mod database;
mod env_provider;
mod errors;
mod logging;

pub use client_settings::ClientSettings;
pub use database::{init_storage_database, migrate_storage_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ConfigError;
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
