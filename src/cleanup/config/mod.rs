//! Load and validate the cleanup configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod network;
pub mod telemetry;

pub use network::{
    default_networks, parse_lookup, parse_networks, LookupMode, NetworkConfig, RawCleanupSection,
    RawNetworkConfig, DEVNET_API_URL, MAINNET_API_URL, TESTNET_API_URL,
};

pub const CONFIG_ENV_KEY: &str = "ASSETS_CLEANUP_CONFIG";

/// Networks to prune and how to query them.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub lookup: LookupMode,
    pub networks: Vec<NetworkConfig>,
    /// `None` when the built-in networks are used.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCleanupConfig {
    cleanup: Option<RawCleanupSection>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            lookup: LookupMode::default(),
            networks: default_networks(),
            source_path: None,
        }
    }
}

impl CleanupConfig {
    /// Resolve in the order: `--config` → `ASSETS_CLEANUP_CONFIG` → built-in networks.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            telemetry::log_env_source(&path, false);
            return Self::load_from_path(path);
        }

        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(&path, true);
                Self::load_from_path(path)
            }
            _ => {
                telemetry::log_builtin();
                let config = Self::default();
                telemetry::log_loaded(&config);
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "elrond_assets_tools::config",
                path = %path.display(),
                reason = %error,
                "Failed to read cleanup configuration file"
            );
            error
        })?;

        let raw: RawCleanupConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "elrond_assets_tools::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse cleanup configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "elrond_assets_tools::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate cleanup configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawCleanupConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let section = raw.cleanup.ok_or(ConfigError::MissingField {
            path: path.clone(),
            field: "cleanup",
        })?;
        let lookup = parse_lookup(section.lookup, &path)?;
        let networks = parse_networks(section.networks, &path)?;

        Ok(Self {
            lookup,
            networks,
            source_path: Some(path),
        })
    }

    /// Networks named in `names`, in configuration order; all of them when `names` is empty.
    pub fn select_networks(&self, names: &[String]) -> anyhow::Result<Vec<NetworkConfig>> {
        if let Some(unknown) = names
            .iter()
            .find(|name| !self.networks.iter().any(|network| &network.name == *name))
        {
            anyhow::bail!("unknown network `{unknown}`");
        }

        Ok(self
            .networks
            .iter()
            .filter(|network| names.is_empty() || names.contains(&network.name))
            .cloned()
            .collect())
    }
}
