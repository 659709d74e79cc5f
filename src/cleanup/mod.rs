//! Prune local token directories whose asset no longer exists on the network.
use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, Instrument};

use crate::{
    cli::CleanupProfile,
    lib::{
        fs::{list_entries, EntryKind},
        telemetry::RunSpan,
    },
};

pub mod config;
pub mod registry;

pub use config::{CleanupConfig, LookupMode, NetworkConfig};
pub use registry::HttpAssetRegistry;

/// Outcome of pruning one token root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub network: String,
    pub root: String,
    pub dry_run: bool,
    pub removed: Vec<String>,
    pub kept: usize,
    pub skipped: usize,
}

/// Delete every directory under `root` whose name the registry does not know.
///
/// Entries are visited in directory-listing order. Non-directories are
/// skipped. The first request or filesystem error aborts the prune.
pub async fn prune_network(
    root: &Path,
    registry: &HttpAssetRegistry,
    dry_run: bool,
) -> Result<PruneReport> {
    let entries = list_entries(root)
        .with_context(|| format!("failed to list token directory {}", root.display()))?;

    let mut report = PruneReport {
        root: root.display().to_string(),
        dry_run,
        ..PruneReport::default()
    };

    for entry in entries {
        if entry.kind != EntryKind::Directory {
            report.skipped += 1;
            continue;
        }

        if registry.asset_exists(&entry.name).await? {
            report.kept += 1;
            continue;
        }

        if !dry_run {
            fs::remove_dir_all(&entry.path)
                .with_context(|| format!("failed to remove {}", entry.path.display()))?;
        }
        info!(
            target: "elrond_assets_tools::cleanup",
            token = %entry.name,
            path = %entry.path.display(),
            dry_run,
            "{}",
            removal_message(dry_run)
        );
        report.removed.push(entry.name);
    }

    Ok(report)
}

fn removal_message(dry_run: bool) -> &'static str {
    if dry_run {
        "Would remove token"
    } else {
        "Removed token"
    }
}

/// Prune every selected network, one after the other.
pub async fn run_cleanup(
    profile: &CleanupProfile,
    config: &CleanupConfig,
) -> Result<Vec<PruneReport>> {
    let networks = config.select_networks(&profile.networks)?;
    let mut reports = Vec::with_capacity(networks.len());

    for network in networks {
        let run = RunSpan::start("cleanup", &network.name);
        let span = run.span().clone();
        let root = profile.assets_root.join(&network.root);
        let registry = HttpAssetRegistry::new(&network.api_url, config.lookup)?;

        let result = async {
            info!(
                target: "elrond_assets_tools::cleanup",
                network = %network.name,
                root = %root.display(),
                api_url = registry.api_url(),
                lookup = config.lookup.as_str(),
                "Pruning token directories"
            );
            prune_network(&root, &registry, profile.dry_run).await
        }
        .instrument(span)
        .await;

        match result {
            Ok(mut report) => {
                run.finish("ok");
                report.network = network.name;
                reports.push(report);
            }
            Err(err) => {
                run.finish("error");
                return Err(err.context(format!("cleanup of network `{}` failed", network.name)));
            }
        }
    }

    Ok(reports)
}
