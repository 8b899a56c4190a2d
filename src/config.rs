use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Port the server listens on when none is given on the command line
pub const DEFAULT_PORT: u16 = 8000;

/// Application configuration structure
///
/// Deployment-level knobs only: the wire contract of the API does not
/// depend on anything in here. Loaded from a JSON5 file when one is
/// given, otherwise the defaults apply.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Address the server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory the dashboard page and its assets are served from
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Load the application configuration from a JSON5 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        tracing::debug!("Loading application configuration from {}", path.display());
        let config_str = fs::read_to_string(path)?;
        let config: Config = json5::from_str(&config_str)?;

        tracing::info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load from `path` when one is given, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is given but the file cannot be read or
    /// parsed; a missing path is not an error.
    pub fn load_or_default(path: Option<&Path>) -> crate::error::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
