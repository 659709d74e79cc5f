use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_elrond-assets-tools");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Create one empty directory per token name under `root`.
pub fn create_token_dirs(root: &Path, names: &[&str]) -> Result<()> {
    for name in names {
        let dir = root.join(name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create token dir {}", dir.display()))?;
        fs::write(dir.join("info.json"), format!("{{\"ticker\": \"{name}\"}}"))
            .with_context(|| format!("failed to write info.json for {name}"))?;
    }
    Ok(())
}

/// Write a cleanup TOML with a single network pointing at `api_url`.
pub fn write_cleanup_config(path: &Path, root: &str, api_url: &str) -> Result<()> {
    let content = format!(
        "[cleanup]\nlookup = \"collections\"\n\n[[cleanup.networks]]\nname = \"mocknet\"\nroot = \"{root}\"\napi_url = \"{api_url}\"\n"
    );
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
