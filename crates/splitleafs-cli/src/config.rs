//! Layered run configuration: command-line flags, then an optional TOML file,
//! then built-in defaults.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
