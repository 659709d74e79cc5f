use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Every way an erdpy installation can fail.
///
/// Each variant renders as the message shown to the user; variants that
/// originate from an I/O or JSON failure keep it as their source.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("You should not install erdpy as root.")]
    PrivilegedUser,
    #[error("You need Python {required} or later (found {found}).")]
    PythonTooOld { found: String, required: String },
    #[error("Could not determine the Python version: {message}")]
    PythonUnavailable { message: String },
    #[error("Unknown platform: {platform}")]
    UnknownPlatform { platform: String },
    #[error("Your operating system is not supported yet.")]
    UnsupportedOs { operating_system: String },
    #[error("{remediation}")]
    VenvUnavailable { remediation: String },
    #[error("Installation will not continue.")]
    Declined,
    #[error("Invalid choice.")]
    InvalidChoice,
    #[error("{message} (exit={exit_code:?})")]
    CommandFailed {
        message: &'static str,
        exit_code: Option<i32>,
    },
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Configuration file {path} is not valid: {source}")]
    ConfigDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration file {path} must contain a JSON object")]
    ConfigNotObject { path: PathBuf },
    #[error("Could not read user input: {message}")]
    Interaction { message: String },
    #[error("Could not resolve the home directory")]
    HomeUnavailable,
}

impl InstallError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
