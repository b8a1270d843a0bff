use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::VeluxeError;

const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_USER_ID: &str = "demo-user";

/// Client settings, read from `<config dir>/veluxe/config.json` when present.
/// The client never writes this file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Origin of the concierge backend, e.g. `https://concierge.example.com`.
    pub backend_url: String,
    /// Identity sent with RSVPs until member sign-in exists.
    pub user_id: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            window_width: 420.,
            window_height: 820.,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, VeluxeError> {
        Ok(dirs::config_dir()
            .ok_or(VeluxeError::NoConfigDir)?
            .join("veluxe")
            .join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location. `Ok(None)` if there is no file.
    pub fn from_local_file() -> Result<Option<Self>, VeluxeError> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::from_path(&config_path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, VeluxeError> {
        let file =
            std::fs::File::open(path).map_err(|e| VeluxeError::ConfigIOError { source: e })?;
        serde_json::from_reader(file).map_err(|e| VeluxeError::ConfigParseError { source: e })
    }

    /// Values given on the command line or in the environment win over the file.
    pub fn with_overrides(mut self, backend_url: Option<String>, user_id: Option<String>) -> Self {
        if let Some(backend_url) = backend_url {
            self.backend_url = backend_url;
        }
        if let Some(user_id) = user_id {
            self.user_id = user_id;
        }
        self
    }
}
