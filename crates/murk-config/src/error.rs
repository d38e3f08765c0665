//! Error types for preset and state files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving kit files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A preset or state file could not be read.
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A preset or state file could not be written.
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid kit TOML.
    #[error("invalid kit file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A preset or state could not be encoded as TOML.
    #[error("failed to encode TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No factory kit with this name
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// A parent directory for a saved file could not be created.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// [`ConfigError::ReadFile`] for `path`.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// [`ConfigError::WriteFile`] for `path`.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// [`ConfigError::CreateDir`] for `path`.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }
}

/// Write `content` to `path`, creating missing parent directories.
pub(crate) fn write_with_parents(path: &std::path::Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
}
