//! One-way upgrade of `erdpy.json` to the named-configurations layout.
use std::{fs, io, path::Path};

use serde_json::{Map, Value};

use crate::lib::{errors::InstallError, fs::to_pretty_json};

/// Key whose presence marks an already migrated document.
pub const ACTIVE_KEY: &str = "active";
pub const CONFIGURATIONS_KEY: &str = "configurations";
pub const DEFAULT_CONFIGURATION: &str = "default";

/// What [`upgrade_config`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    Absent,
    AlreadyMigrated,
    Migrated,
}

/// Wrap a flat map as `{"active": "default", "configurations": {"default": <map>}}`.
pub fn wrap_legacy(legacy: Map<String, Value>) -> Value {
    let mut configurations = Map::new();
    configurations.insert(DEFAULT_CONFIGURATION.into(), Value::Object(legacy));

    let mut document = Map::new();
    document.insert(ACTIVE_KEY.into(), Value::String(DEFAULT_CONFIGURATION.into()));
    document.insert(CONFIGURATIONS_KEY.into(), Value::Object(configurations));
    Value::Object(document)
}

/// Migrate the file at `path` in place when it still has the legacy shape.
pub fn upgrade_config(path: &Path) -> Result<MigrationOutcome, InstallError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(MigrationOutcome::Absent),
        Err(source) => return Err(InstallError::io(path, source)),
    };

    let document: Value =
        serde_json::from_str(&content).map_err(|source| InstallError::ConfigDocument {
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Object(legacy) = document else {
        return Err(InstallError::ConfigNotObject {
            path: path.to_path_buf(),
        });
    };
    if legacy.contains_key(ACTIVE_KEY) {
        return Ok(MigrationOutcome::AlreadyMigrated);
    }

    let bytes =
        to_pretty_json(&wrap_legacy(legacy)).map_err(|source| InstallError::ConfigDocument {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, bytes).map_err(|source| InstallError::io(path, source))?;
    Ok(MigrationOutcome::Migrated)
}
