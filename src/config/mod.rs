//! Application configuration loaded from files and APP__ environment variables

mod app_config;

pub use app_config::{AppConfig, AuthConfig, LogFormat, LoggingConfig, ServerConfig, StorageConfig};
