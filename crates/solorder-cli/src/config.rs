//! Locating and loading the TOML configuration.
//!
//! [`ConfigSource::locate`] decides which file, if any, configures this run.
//! [`load_config`] reads it and lays command-line values over the result, so
//! callers get one [`AppConfig`] with every source already merged.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use solorder::{SolorderError, config::AppConfig};

/// Configuration file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "solorder/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse TOML configuration {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl From<ConfigError> for SolorderError {
    fn from(err: ConfigError) -> Self {
        SolorderError::Config(err.to_string())
    }
}

/// The file a run is configured from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; it must exist.
    Explicit(PathBuf),
    /// `solorder/config.toml` under the working directory.
    Local(PathBuf),
    /// `config.toml` in the platform configuration directory.
    Platform(PathBuf),
    /// No file found; built-in defaults apply.
    Defaults,
}

impl ConfigSource {
    /// Pick the first applicable source: the explicit path, then the local
    /// file, then the platform file, then the defaults.
    pub fn locate(explicit: Option<&Path>) -> Self {
        let platform = ProjectDirs::from("com", "solorder", "solorder")
            .map(|dirs| dirs.config_dir().join("config.toml"));
        if platform.is_none() {
            debug!("Could not determine platform-specific config directory");
        }

        Self::locate_in(explicit, Path::new(LOCAL_CONFIG), platform)
    }

    fn locate_in(explicit: Option<&Path>, local: &Path, platform: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }
        if local.exists() {
            return Self::Local(local.to_path_buf());
        }
        match platform {
            Some(path) if path.exists() => Self::Platform(path),
            _ => Self::Defaults,
        }
    }

    /// The file to read, unless defaults apply.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Local(path) | Self::Platform(path) => Some(path),
            Self::Defaults => None,
        }
    }

    fn read(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = self.path() else {
            return Ok(AppConfig::default());
        };

        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::MissingFile(path.to_path_buf()),
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        toml::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// Load the configuration for this run.
///
/// `project_root`, when given on the command line, replaces
/// `compare.project_root` from the file.
///
/// # Errors
///
/// Returns [`SolorderError::Config`] if an explicit file is missing, or if
/// the chosen file cannot be read or parsed.
pub fn load_config(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> Result<AppConfig, SolorderError> {
    let source = ConfigSource::locate(explicit);
    info!(source:? = source; "Loading configuration");

    let mut config = source.read()?;
    if let Some(root) = project_root {
        debug!(root:? = root; "Project root overridden on the command line");
        config = config.with_project_root(root);
    }

    Ok(config)
}
