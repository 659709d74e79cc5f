//! Append the SDK path to the user's shell profile.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::lib::{
    errors::InstallError,
    fs::append_to_file,
    paths::path_list_contains,
    telemetry::emit_banner,
};

use super::{interaction::UserInteraction, preflight::OperatingSystem, InstallerConfig};

const LINUX_PROFILE_FILE: &str = ".profile";

/// What [`add_sdk_to_path`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePatch {
    Disabled,
    AlreadyOnPath,
    Patched { profile_file: PathBuf },
}

/// Line appended to the profile file.
pub fn export_line(sdk_path: &Path) -> String {
    format!("\nexport PATH=\"{}:$PATH\"\t# elrond-sdk\n", sdk_path.display())
}

/// Profile file to patch: `~/.profile` on Linux, the chosen shell's file on macOS.
pub fn profile_file<U: UserInteraction>(
    config: &InstallerConfig,
    operating_system: OperatingSystem,
    interaction: &U,
) -> Result<PathBuf, InstallError> {
    let relative = match operating_system {
        OperatingSystem::Linux => LINUX_PROFILE_FILE,
        _ => match config.shell {
            Some(shell) => shell.profile_file(),
            None => interaction.choose_shell()?.profile_file(),
        },
    };
    Ok(config.home_dir.join(relative))
}

/// Add the SDK path to `PATH` through the profile file unless it is already there.
pub fn add_sdk_to_path<U: UserInteraction>(
    config: &InstallerConfig,
    operating_system: OperatingSystem,
    interaction: &U,
) -> Result<ProfilePatch, InstallError> {
    let sdk_path = config.layout.root();
    info!(target: "elrond_assets_tools::installer", "Checking PATH variable.");
    if path_list_contains(&config.path_env, sdk_path) {
        info!(
            target: "elrond_assets_tools::installer",
            sdk_path = %sdk_path.display(),
            "elrond-sdk path already in $PATH variable."
        );
        return Ok(ProfilePatch::AlreadyOnPath);
    }

    let profile_file = profile_file(config, operating_system, interaction)?;
    info!(
        target: "elrond_assets_tools::installer",
        sdk_path = %sdk_path.display(),
        profile_file = %profile_file.display(),
        "Adding elrond-sdk path to $PATH variable; profile file will be modified."
    );
    append_to_file(&profile_file, &export_line(sdk_path))
        .map_err(|source| InstallError::io(&profile_file, source))?;

    emit_banner(&format!(
        "[{}] has been modified.\nPlease RESTART THE USER SESSION.",
        profile_file.display()
    ));
    Ok(ProfilePatch::Patched { profile_file })
}
