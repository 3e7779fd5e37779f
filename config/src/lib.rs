//! # Voxscribe Configuration
//!
//! Endpoint configuration for the three backend services (auth, profile,
//! content). Defaults match the development topology: one origin per
//! service on localhost ports 8080/8081/8082. Values can be overridden
//! from a TOML file or from `VOXSCRIBE_*` environment variables.

pub mod file_loader;
pub mod settings;

pub use file_loader::load_from_path;
pub use settings::{ClientConfig, ConfigError, EndpointConfig};
