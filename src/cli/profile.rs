//! Resolution of CLI arguments into run profiles.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    installer::{InstallerConfig, PackageSelector, Shell, LEGACY_DIR_NAME},
    lib::{
        errors::InstallError,
        paths::{expand_tilde, SdkLayout},
    },
};

/// Resolved `cleanup` invocation.
#[derive(Debug, Clone)]
pub struct CleanupProfile {
    pub config_path: Option<PathBuf>,
    /// Directory the network roots are relative to.
    pub assets_root: PathBuf,
    /// Empty means every configured network.
    pub networks: Vec<String>,
    pub dry_run: bool,
}

/// Options collected from `erdpy-up` flags.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub sdk_path: PathBuf,
    pub modify_path: bool,
    pub exact_version: Option<String>,
    pub from_branch: Option<String>,
    pub shell: Option<Shell>,
}

/// Resolve the assets root: CLI override → current directory.
pub fn resolve_assets_root(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(match override_path {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    })
}

/// Home directory of the current user.
pub fn resolve_home_dir() -> Result<PathBuf, InstallError> {
    require_home_dir(dirs::home_dir())
}

fn require_home_dir(home_dir: Option<PathBuf>) -> Result<PathBuf, InstallError> {
    home_dir.ok_or(InstallError::HomeUnavailable)
}

/// SDK path with `~` expanded and relative paths anchored at `cwd`.
pub fn resolve_sdk_path(raw: &Path, home_dir: &Path, cwd: &Path) -> PathBuf {
    let expanded = expand_tilde(raw, home_dir);
    if expanded.is_relative() {
        cwd.join(expanded)
    } else {
        expanded
    }
}

/// Build the installer configuration from flags, the home and working directories and the startup `PATH`.
pub fn build_installer_config(
    options: InstallOptions,
    home_dir: &Path,
    cwd: &Path,
    path_env: String,
) -> InstallerConfig {
    let sdk_path = resolve_sdk_path(&options.sdk_path, home_dir, cwd);
    InstallerConfig {
        layout: SdkLayout::new(sdk_path),
        home_dir: home_dir.to_path_buf(),
        legacy_dir: home_dir.join(LEGACY_DIR_NAME),
        package: PackageSelector::from_options(options.exact_version, options.from_branch),
        modify_path: options.modify_path,
        shell: options.shell,
        path_env,
    }
}
