//! Host checks run before anything on disk is touched.
use std::fmt;

use tracing::info;

use crate::lib::errors::InstallError;

use super::host::{PythonHost, PythonVersion};

pub const MIN_REQUIRED_PYTHON_VERSION: PythonVersion = PythonVersion::new(3, 8, 0);

/// Operating system family as the installer understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Linux,
    Osx,
    Windows,
}

impl OperatingSystem {
    /// Map a `std::env::consts::OS` value onto a known family.
    pub fn classify(platform: &str) -> Result<Self, InstallError> {
        match platform {
            "linux" => Ok(OperatingSystem::Linux),
            "macos" => Ok(OperatingSystem::Osx),
            "windows" => Ok(OperatingSystem::Windows),
            other => Err(InstallError::UnknownPlatform {
                platform: other.to_string(),
            }),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Osx => "osx",
            OperatingSystem::Windows => "windows",
        }
    }

    pub const fn is_supported(&self) -> bool {
        matches!(self, OperatingSystem::Linux | OperatingSystem::Osx)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facts gathered by [`check_host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostReport {
    pub python_version: PythonVersion,
    pub operating_system: OperatingSystem,
}

/// Verify user, interpreter version and operating system, in that order.
pub fn check_host<H: PythonHost>(host: &H) -> Result<HostReport, InstallError> {
    info!(target: "elrond_assets_tools::installer", "Checking user.");
    if host.is_privileged_user() {
        return Err(InstallError::PrivilegedUser);
    }

    info!(target: "elrond_assets_tools::installer", "Checking Python version.");
    let python_version = host.python_version()?;
    info!(
        target: "elrond_assets_tools::installer",
        python_version = %python_version,
        "Python version"
    );
    if python_version < MIN_REQUIRED_PYTHON_VERSION {
        return Err(InstallError::PythonTooOld {
            found: python_version.to_string(),
            required: MIN_REQUIRED_PYTHON_VERSION.to_string(),
        });
    }

    info!(target: "elrond_assets_tools::installer", "Checking operating system.");
    let operating_system = OperatingSystem::classify(&host.platform())?;
    info!(
        target: "elrond_assets_tools::installer",
        operating_system = %operating_system,
        "Operating system"
    );
    if !operating_system.is_supported() {
        return Err(InstallError::UnsupportedOs {
            operating_system: operating_system.to_string(),
        });
    }

    Ok(HostReport {
        python_version,
        operating_system,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_known_platforms() {
        assert_eq!(
            OperatingSystem::classify("macos").expect("known"),
            OperatingSystem::Osx
        );
        assert!(!OperatingSystem::classify("windows")
            .expect("known")
            .is_supported());
        assert!(matches!(
            OperatingSystem::classify("freebsd"),
            Err(InstallError::UnknownPlatform { platform }) if platform == "freebsd"
        ));
    }
}
