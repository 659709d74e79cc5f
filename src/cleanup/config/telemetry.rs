use tracing::{debug, info};

use super::{CleanupConfig, CONFIG_ENV_KEY};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "elrond_assets_tools::config",
            path = %path.display(),
            "Loading cleanup configuration using ASSETS_CLEANUP_CONFIG environment variable"
        );
    } else {
        info!(
            target: "elrond_assets_tools::config",
            path = %path.display(),
            "Loading cleanup configuration from --config"
        );
    }
}

pub fn log_builtin() {
    debug!(
        target: "elrond_assets_tools::config",
        env = CONFIG_ENV_KEY,
        "No cleanup configuration given; using built-in networks"
    );
}

pub fn log_loaded(config: &CleanupConfig) {
    let source = config
        .source_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<built-in>".into());
    info!(
        target: "elrond_assets_tools::config",
        source = %source,
        lookup = config.lookup.as_str(),
        networks = config.networks.len(),
        "Cleanup configuration loaded successfully"
    );
}
