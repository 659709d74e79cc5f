//! CLI entrypoint module structure.
use anyhow::{Context, Result};
use serde_json::json;

use crate::cleanup::{run_cleanup, CleanupConfig, PruneReport};

pub mod args;
pub mod profile;

pub use args::{CleanupArgs, InstallArgs, ParsedCommand, ToolArgs, ToolCommand};
pub use profile::{
    build_installer_config, resolve_assets_root, resolve_home_dir, resolve_sdk_path, CleanupProfile,
    InstallOptions,
};

/// Run `cleanup` and return a user-facing JSON payload.
pub async fn execute_cleanup(profile: CleanupProfile) -> Result<String> {
    let config = CleanupConfig::resolve(profile.config_path.clone())
        .context("failed to load cleanup configuration")?;
    let reports = run_cleanup(&profile, &config).await?;
    format_cleanup_payload(&reports)
}

/// Summarize prune reports as pretty JSON.
pub fn format_cleanup_payload(reports: &[PruneReport]) -> Result<String> {
    let removed_total = reports
        .iter()
        .map(|report| report.removed.len())
        .sum::<usize>();
    let status = match (removed_total, reports.iter().any(|report| report.dry_run)) {
        (0, _) => "clean",
        (_, true) => "planned",
        (_, false) => "pruned",
    };

    let payload = json!({
        "status": status,
        "removed_total": removed_total,
        "networks": reports,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
