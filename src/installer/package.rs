//! Install erdpy into the virtual environment and expose its entry point.
use std::fmt;

use tracing::info;

use crate::lib::{errors::InstallError, fs::replace_symlink};

use super::{
    host::PythonHost,
    migrate::{upgrade_config, MigrationOutcome},
    InstallerConfig,
};

pub const PACKAGE_NAME: &str = "erdpy";
const SOURCE_ARCHIVE_BASE: &str =
    "https://github.com/ElrondNetwork/elrond-sdk-erdpy/archive/refs/heads";

/// Which erdpy to hand to pip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSelector {
    Latest,
    Exact(String),
    Branch(String),
}

impl PackageSelector {
    /// A branch wins over an exact version.
    pub fn from_options(exact_version: Option<String>, from_branch: Option<String>) -> Self {
        match (from_branch, exact_version) {
            (Some(branch), _) => PackageSelector::Branch(branch),
            (None, Some(version)) => PackageSelector::Exact(version),
            (None, None) => PackageSelector::Latest,
        }
    }

    /// Requirement string passed to `pip install`.
    pub fn requirement(&self) -> String {
        match self {
            PackageSelector::Latest => PACKAGE_NAME.to_string(),
            PackageSelector::Exact(version) => format!("{PACKAGE_NAME}=={version}"),
            PackageSelector::Branch(branch) => format!("{SOURCE_ARCHIVE_BASE}/{branch}.zip"),
        }
    }
}

impl fmt::Display for PackageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.requirement())
    }
}

/// Upgrade pip, install erdpy, check `erdpy --version`, migrate the config and link `erdpy`.
pub fn install_erdpy<H: PythonHost>(
    config: &InstallerConfig,
    host: &H,
) -> Result<MigrationOutcome, InstallError> {
    info!(
        target: "elrond_assets_tools::installer",
        requirement = %config.package,
        "Installing erdpy in virtual environment..."
    );
    let venv_dir = config.layout.venv_dir();
    let requirement = config.package.requirement();

    let steps: [(&str, Vec<&str>, &'static str); 3] = [
        (
            "python3",
            vec!["-m", "pip", "install", "--upgrade", "pip"],
            "Could not upgrade pip.",
        ),
        (
            "pip3",
            vec!["install", "--no-cache-dir", requirement.as_str()],
            "Could not install erdpy.",
        ),
        (PACKAGE_NAME, vec!["--version"], "Could not install erdpy."),
    ];
    for (program, args, failure) in steps {
        let outcome = host.run_in_venv(&venv_dir, program, &args)?;
        if !outcome.success() {
            return Err(InstallError::CommandFailed {
                message: failure,
                exit_code: outcome.exit_code,
            });
        }
    }

    info!(
        target: "elrond_assets_tools::installer",
        "Checking and upgrading configuration file"
    );
    let migration = upgrade_config(&config.layout.config_file())?;
    info!(
        target: "elrond_assets_tools::installer",
        outcome = ?migration,
        "Configuration file checked"
    );

    let link = config.layout.erdpy_link();
    let target = config.layout.venv_bin_dir().join(PACKAGE_NAME);
    replace_symlink(&target, &link).map_err(|source| InstallError::io(&link, source))?;

    info!(
        target: "elrond_assets_tools::installer",
        "You have successfully installed erdpy."
    );
    Ok(migration)
}
