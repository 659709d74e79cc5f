//! Remove previous installations and create the virtual environment.
use std::{fs, path::Path};

use tracing::info;

use crate::lib::{
    errors::InstallError,
    fs::{remove_dir_if_exists, replace_symlink},
};

use super::{
    host::PythonHost,
    interaction::UserInteraction,
    preflight::{HostReport, OperatingSystem},
    InstallerConfig,
};

const VENV_TUTORIAL_URL: &str = "https://docs.python.org/3/tutorial/venv.html";

/// Remove the legacy `ElrondSCTools` folder (after confirmation) and any previous virtual environment.
pub fn remove_installation<U: UserInteraction>(
    config: &InstallerConfig,
    interaction: &U,
) -> Result<(), InstallError> {
    let legacy_dir = &config.legacy_dir;
    if legacy_dir.is_dir() {
        let prompt = format!(
            "Older installation in {} has to be removed. Allow?",
            legacy_dir.display()
        );
        if !interaction.confirm(&prompt)? {
            return Err(InstallError::Declined);
        }
        fs::remove_dir_all(legacy_dir).map_err(|source| InstallError::io(legacy_dir, source))?;
        info!(
            target: "elrond_assets_tools::installer",
            path = %legacy_dir.display(),
            "Removed previous installation (ElrondSCTools)."
        );
    }

    let venv_dir = config.layout.venv_dir();
    if remove_dir_if_exists(&venv_dir).map_err(|source| InstallError::io(&venv_dir, source))? {
        info!(
            target: "elrond_assets_tools::installer",
            path = %venv_dir.display(),
            "Removed previous installation (virtual environment)."
        );
    }

    Ok(())
}

/// Fail with a platform-specific hint when `venv`/`ensurepip` are missing.
pub fn require_venv<H: PythonHost>(host: &H, report: &HostReport) -> Result<(), InstallError> {
    if host.has_venv_support() {
        info!(
            target: "elrond_assets_tools::installer",
            "Packages found: ensurepip, venv."
        );
        return Ok(());
    }

    let remediation = match report.operating_system {
        OperatingSystem::Linux => {
            let package = format!(
                "python{}.{}-venv",
                report.python_version.major, report.python_version.minor
            );
            format!(
                "Packages [venv] or [ensurepip] not found. Please run \"sudo apt install {package}\" and then run erdpy-up again."
            )
        }
        _ => format!(
            "Packages [venv] or [ensurepip] not found, please install them first. See {VENV_TUTORIAL_URL}."
        ),
    };
    Err(InstallError::VenvUnavailable { remediation })
}

/// Create a fresh virtual environment and link its activation script into the SDK path.
pub fn create_venv<H: PythonHost>(
    config: &InstallerConfig,
    host: &H,
    report: &HostReport,
) -> Result<(), InstallError> {
    require_venv(host, report)?;

    let venv_dir = config.layout.venv_dir();
    ensure_folder(&venv_dir)?;

    info!(
        target: "elrond_assets_tools::installer",
        path = %venv_dir.display(),
        "Creating virtual environment."
    );
    let outcome = host.create_venv(&venv_dir)?;
    if !outcome.success() {
        return Err(InstallError::CommandFailed {
            message: "Could not create virtual environment.",
            exit_code: outcome.exit_code,
        });
    }

    let link = config.layout.activate_link();
    let target = config.layout.venv_bin_dir().join("activate");
    replace_symlink(&target, &link).map_err(|source| InstallError::io(&link, source))?;

    info!(
        target: "elrond_assets_tools::installer",
        path = %venv_dir.display(),
        "Virtual environment has been created."
    );
    Ok(())
}

fn ensure_folder(path: &Path) -> Result<(), InstallError> {
    fs::create_dir_all(path).map_err(|source| InstallError::io(path, source))
}
