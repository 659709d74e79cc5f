//! Path resolution helpers (home expansion and the SDK directory layout).

use std::path::{Path, PathBuf};

/// Name of the virtual environment directory inside the SDK path.
pub const VENV_DIR_NAME: &str = "erdpy-venv";
/// Name of the `erdpy` entry point link inside the SDK path.
pub const ERDPY_LINK_NAME: &str = "erdpy";
/// Name of the activation script link inside the SDK path.
pub const ACTIVATE_LINK_NAME: &str = "erdpy-activate";
/// Name of the erdpy configuration document inside the SDK path.
pub const CONFIG_FILE_NAME: &str = "erdpy.json";

/// Expand a leading `~` against `home`.
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Returns true if `entry` is one of the entries of a `PATH`-style value.
pub fn path_list_contains(path_value: &str, entry: &Path) -> bool {
    std::env::split_paths(path_value).any(|candidate| candidate == entry)
}

/// Locations derived from the SDK path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLayout {
    root: PathBuf,
}

impl SdkLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(VENV_DIR_NAME)
    }

    pub fn venv_bin_dir(&self) -> PathBuf {
        self.venv_dir().join("bin")
    }

    pub fn activate_link(&self) -> PathBuf {
        self.root.join(ACTIVATE_LINK_NAME)
    }

    pub fn erdpy_link(&self) -> PathBuf {
        self.root.join(ERDPY_LINK_NAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}
