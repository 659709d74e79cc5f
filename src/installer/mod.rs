//! `erdpy-up`: install erdpy into an isolated virtual environment under the SDK path.
//!
//! The flow is strictly sequential and fail-fast:
//! host checks, removal of previous installations, virtual environment
//! creation, package installation (with configuration migration), and the
//! optional shell profile patch. Every step receives the same
//! [`InstallerConfig`]; host access goes through [`PythonHost`] and prompts
//! through [`UserInteraction`].
use std::path::PathBuf;

use tracing::info;

use crate::lib::{errors::InstallError, paths::SdkLayout, telemetry::emit_banner};

pub mod bootstrap;
pub mod host;
pub mod interaction;
pub mod migrate;
pub mod package;
pub mod preflight;
pub mod shell_profile;

pub use host::{ExitOutcome, PythonHost, PythonVersion, SystemPythonHost};
pub use interaction::{ScriptedInteraction, Shell, TerminalInteraction, UserInteraction};
pub use migrate::MigrationOutcome;
pub use package::PackageSelector;
pub use preflight::{HostReport, OperatingSystem, MIN_REQUIRED_PYTHON_VERSION};
pub use shell_profile::ProfilePatch;

pub const DEFAULT_SDK_PATH: &str = "~/elrondsdk";
pub const LEGACY_DIR_NAME: &str = "ElrondSCTools";

/// Everything the installer needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    pub layout: SdkLayout,
    pub home_dir: PathBuf,
    /// Pre-SDK installation removed on sight (`~/ElrondSCTools`).
    pub legacy_dir: PathBuf,
    pub package: PackageSelector,
    pub modify_path: bool,
    /// Skips the shell prompt on macOS when set.
    pub shell: Option<Shell>,
    /// `PATH` as seen when the installer started.
    pub path_env: String,
}

/// Result of a successful installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub host: HostReport,
    pub migration: MigrationOutcome,
    pub profile: ProfilePatch,
}

/// Run the whole installation.
pub fn run_install<H, U>(
    config: &InstallerConfig,
    host: &H,
    interaction: &U,
) -> Result<InstallSummary, InstallError>
where
    H: PythonHost,
    U: UserInteraction,
{
    let report = preflight::check_host(host)?;

    bootstrap::remove_installation(config, interaction)?;
    bootstrap::create_venv(config, host, &report)?;
    let migration = package::install_erdpy(config, host)?;

    let profile = if config.modify_path {
        let patch = shell_profile::add_sdk_to_path(config, report.operating_system, interaction)?;
        emit_banner(
            "Upon restarting the user session, [$ erdpy] command should be available in your shell.\n\
             Furthermore, after restarting the user session, you can use [$ source erdpy-activate] to activate the Python virtual environment containing erdpy.",
        );
        patch
    } else {
        info!(
            target: "elrond_assets_tools::installer",
            "Skipping PATH modification (--no-modify-path)."
        );
        ProfilePatch::Disabled
    };

    Ok(InstallSummary {
        host: report,
        migration,
        profile,
    })
}
