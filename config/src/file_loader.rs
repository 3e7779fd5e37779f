use crate::settings::{ClientConfig, ConfigError};
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Loads and validates a [`ClientConfig`] from a TOML file.
///
/// Missing sections fall back to their defaults, so a partial file such as
///
/// ```toml
/// [content]
/// base_url = "https://content.voxscribe.io"
/// ```
///
/// overrides only the content endpoint.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading client config");

    let raw = std::fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&raw)?;
    config.validate()?;

    Ok(config)
}
