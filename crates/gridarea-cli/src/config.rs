//! Finding and reading the grid and style config for a run.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use gridarea::{GridAreaError, config::AppConfig};

/// Config file consulted in the working directory.
const LOCAL_CONFIG: &str = "gridarea/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read config file {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("config file {} is not valid TOML: {message}", .path.display())]
    Syntax { path: PathBuf, message: String },

    #[error("config file {} has an invalid value: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl From<ConfigError> for GridAreaError {
    fn from(err: ConfigError) -> Self {
        GridAreaError::Config(err.to_string())
    }
}

/// Loads the config for a run.
///
/// An explicit path must exist. Without one, the first file found among
/// `gridarea/config.toml` and the user's config directory is used, and the
/// built-in defaults apply when there is neither.
///
/// # Errors
///
/// Returns [`GridAreaError::Config`] when the chosen file is missing,
/// unreadable, not TOML, or out of range.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, GridAreaError> {
    let path = match explicit_path {
        Some(path) => {
            let path = path.as_ref().to_path_buf();
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            path
        }
        None => match discover() {
            Some(path) => path,
            None => {
                debug!("No config file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading config");
    Ok(read_config(&path)?)
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(local);
    }

    let Some(dirs) = ProjectDirs::from("com", "gridarea", "gridarea") else {
        debug!("No user config directory on this platform");
        return None;
    };
    let user = dirs.config_dir().join("config.toml");
    if user.is_file() {
        return Some(user);
    }
    debug!(path = user.display().to_string(); "No user config file");
    None
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|err| ConfigError::Syntax {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;
    config.validate().map_err(|err| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    Ok(config)
}
