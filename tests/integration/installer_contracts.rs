use std::{fs, path::Path};

use anyhow::Result;
use serde_json::{json, Value};
use tempfile::tempdir;

use elrond_assets_tools::{
    cli::{build_installer_config, InstallOptions},
    installer::{
        run_install, ExitOutcome, MigrationOutcome, PythonHost, PythonVersion,
        ScriptedInteraction, DEFAULT_SDK_PATH,
    },
    lib::errors::InstallError,
};

/// Host double for a macOS machine with a working Python 3.11.
struct MacHost;

impl PythonHost for MacHost {
    fn is_privileged_user(&self) -> bool {
        false
    }

    fn python_version(&self) -> Result<PythonVersion, InstallError> {
        Ok(PythonVersion::new(3, 11, 4))
    }

    fn platform(&self) -> String {
        "macos".into()
    }

    fn has_venv_support(&self) -> bool {
        true
    }

    fn create_venv(&self, venv_dir: &Path) -> Result<ExitOutcome, InstallError> {
        fs::create_dir_all(venv_dir.join("bin")).map_err(|err| InstallError::io(venv_dir, err))?;
        Ok(ExitOutcome { exit_code: Some(0) })
    }

    fn run_in_venv(
        &self,
        _venv_dir: &Path,
        _program: &str,
        _args: &[&str],
    ) -> Result<ExitOutcome, InstallError> {
        Ok(ExitOutcome { exit_code: Some(0) })
    }
}

fn options(modify_path: bool) -> InstallOptions {
    InstallOptions {
        sdk_path: DEFAULT_SDK_PATH.into(),
        modify_path,
        exact_version: None,
        from_branch: None,
        shell: None,
    }
}

#[test]
fn install_migrates_existing_erdpy_config() -> Result<()> {
    let home = tempdir()?;
    let config = build_installer_config(options(false), home.path(), home.path(), String::new());
    fs::create_dir_all(config.layout.root())?;
    fs::write(
        config.layout.config_file(),
        r#"{"proxy": "https://gateway.elrond.com", "chainID": "1"}"#,
    )?;

    let summary = run_install(&config, &MacHost, &ScriptedInteraction::default())?;

    assert_eq!(summary.migration, MigrationOutcome::Migrated);
    let document: Value = serde_json::from_str(&fs::read_to_string(config.layout.config_file())?)?;
    assert_eq!(document["active"], "default");
    assert_eq!(
        document["configurations"]["default"],
        json!({ "proxy": "https://gateway.elrond.com", "chainID": "1" })
    );
    Ok(())
}

#[test]
fn unanswered_shell_prompt_is_an_invalid_choice() -> Result<()> {
    let home = tempdir()?;
    let config = build_installer_config(options(true), home.path(), home.path(), String::new());

    let error = run_install(&config, &MacHost, &ScriptedInteraction::default())
        .expect_err("no shell was chosen");

    assert_eq!(error.to_string(), "Invalid choice.");
    assert!(!home.path().join(".zshrc").exists());
    assert!(!home.path().join(".bash_profile").exists());
    Ok(())
}
