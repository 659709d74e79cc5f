use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const MAINNET_API_URL: &str = "https://api.elrond.com";
pub const TESTNET_API_URL: &str = "https://testnet-api.elrond.com";
pub const DEVNET_API_URL: &str = "https://devnet-api.elrond.com";

/// How a token directory name is checked against the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// `HEAD /tokens/{id}`, then `GET /collections/{id}`.
    #[default]
    Collections,
    /// `HEAD /tokens/{id}`, then `GET /nfts?collection={id}` expecting a non-empty array.
    NftQuery,
}

impl LookupMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LookupMode::Collections => "collections",
            LookupMode::NftQuery => "nft-query",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "collections" => Some(LookupMode::Collections),
            "nft-query" => Some(LookupMode::NftQuery),
            _ => None,
        }
    }
}

/// A directory of token assets paired with the API that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    pub root: PathBuf,
    pub api_url: String,
}

impl NetworkConfig {
    fn new(name: &str, root: &str, api_url: &str) -> Self {
        Self {
            name: name.to_string(),
            root: PathBuf::from(root),
            api_url: api_url.to_string(),
        }
    }
}

/// Networks used when no configuration file is given.
pub fn default_networks() -> Vec<NetworkConfig> {
    vec![
        NetworkConfig::new("mainnet", "tokens", MAINNET_API_URL),
        NetworkConfig::new("testnet", "testnet/tokens", TESTNET_API_URL),
        NetworkConfig::new("devnet", "devnet/tokens", DEVNET_API_URL),
    ]
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCleanupSection {
    pub lookup: Option<String>,
    pub networks: Option<Vec<RawNetworkConfig>>,
}

#[derive(Debug, Deserialize)]
pub struct RawNetworkConfig {
    pub name: Option<String>,
    pub root: Option<PathBuf>,
    pub api_url: Option<String>,
}

pub fn parse_lookup(raw: Option<String>, path: &Path) -> Result<LookupMode, ConfigError> {
    match raw {
        None => Ok(LookupMode::default()),
        Some(value) => LookupMode::parse(&value).ok_or_else(|| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "cleanup.lookup",
            message: format!("Use `collections` or `nft-query` (got `{value}`)"),
        }),
    }
}

pub fn parse_networks(
    raw: Option<Vec<RawNetworkConfig>>,
    path: &Path,
) -> Result<Vec<NetworkConfig>, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "cleanup.networks",
    })?;
    if raw.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "cleanup.networks",
            message: "Declare at least one network".into(),
        });
    }

    let mut seen = HashSet::new();
    let mut networks = Vec::with_capacity(raw.len());
    for entry in raw {
        let network = parse_network(entry, path)?;
        if !seen.insert(network.name.clone()) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "cleanup.networks.name",
                message: format!("Duplicate network name: {}", network.name),
            });
        }
        networks.push(network);
    }
    Ok(networks)
}

fn parse_network(raw: RawNetworkConfig, path: &Path) -> Result<NetworkConfig, ConfigError> {
    let name = raw.name.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "cleanup.networks.name",
    })?;
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "cleanup.networks.name",
            message: "Network names cannot be empty".into(),
        });
    }

    let root = raw.root.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "cleanup.networks.root",
    })?;
    if root.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "cleanup.networks.root",
            message: format!("Network `{name}` has an empty root"),
        });
    }

    let api_url = raw.api_url.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "cleanup.networks.api_url",
    })?;
    validate_api_url(path, &api_url)?;

    Ok(NetworkConfig {
        name,
        root,
        api_url: api_url.trim_end_matches('/').to_string(),
    })
}

fn validate_api_url(path: &Path, api_url: &str) -> Result<(), ConfigError> {
    if api_url.starts_with("https://") || api_url.starts_with("http://") {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "cleanup.networks.api_url",
        message: format!("Use an http(s) URL: {api_url}"),
    })
}
