//! CLI argument definitions and profile construction.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use super::{
    build_installer_config, resolve_assets_root, resolve_home_dir, CleanupProfile, InstallOptions,
};
use crate::installer::{InstallerConfig, Shell, DEFAULT_SDK_PATH};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Cleanup(CleanupProfile),
    Install(InstallerConfig),
}

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum ToolCommand {
    /// Remove token directories whose token or collection no longer exists.
    #[command(about = "Remove token directories whose token or collection no longer exists")]
    Cleanup(CleanupArgs),
    /// Install erdpy into an isolated virtual environment.
    #[command(
        name = "erdpy-up",
        about = "Install erdpy into an isolated virtual environment",
        after_help = "Hint: use `--no-modify-path` to leave your shell profile untouched."
    )]
    ErdpyUp(InstallArgs),
}

/// Arguments for `cleanup`.
#[derive(Debug, Clone, Args)]
pub struct CleanupArgs {
    /// Path to a cleanup TOML file (overrides ASSETS_CLEANUP_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Directory the network roots are relative to (defaults to the current directory).
    #[arg(long)]
    pub assets_root: Option<PathBuf>,
    /// Only prune the named network (repeatable).
    #[arg(long = "network")]
    pub networks: Vec<String>,
    /// Report what would be removed without deleting anything.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Arguments for `erdpy-up`.
#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// Add the SDK path to $PATH in the shell profile (default).
    #[arg(long, overrides_with = "no_modify_path")]
    pub modify_path: bool,
    /// Leave the shell profile untouched.
    #[arg(long, overrides_with = "modify_path")]
    pub no_modify_path: bool,
    /// Where to install elrond-sdk.
    #[arg(long = "elrondsdk-path", default_value = DEFAULT_SDK_PATH)]
    pub elrondsdk_path: PathBuf,
    /// The exact version of erdpy to install.
    #[arg(long)]
    pub exact_version: Option<String>,
    /// Install from a branch of ElrondNetwork/elrond-sdk-erdpy.
    #[arg(long)]
    pub from_branch: Option<String>,
    /// Shell profile to patch on macOS (prompts when omitted).
    #[arg(long, value_enum)]
    pub shell: Option<Shell>,
}

impl InstallArgs {
    pub fn options(&self) -> InstallOptions {
        InstallOptions {
            sdk_path: self.elrondsdk_path.clone(),
            modify_path: !self.no_modify_path,
            exact_version: self.exact_version.clone(),
            from_branch: self.from_branch.clone(),
            shell: self.shell,
        }
    }
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Elrond assets maintenance and erdpy installer",
    long_about = None
)]
pub struct ToolArgs {
    #[command(subcommand)]
    pub command: ToolCommand,
}

impl ToolArgs {
    /// Resolve parsed arguments against the environment.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            ToolCommand::Cleanup(args) => Ok(ParsedCommand::Cleanup(CleanupProfile {
                config_path: args.config_override,
                assets_root: resolve_assets_root(args.assets_root)?,
                networks: args.networks,
                dry_run: args.dry_run,
            })),
            ToolCommand::ErdpyUp(args) => {
                let home_dir = resolve_home_dir()?;
                let cwd = env::current_dir().context("failed to obtain current directory")?;
                let path_env = env::var("PATH").unwrap_or_default();
                Ok(ParsedCommand::Install(build_installer_config(
                    args.options(),
                    &home_dir,
                    &cwd,
                    path_env,
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install_args(argv: &[&str]) -> InstallArgs {
        let mut full = vec!["elrond-assets-tools", "erdpy-up"];
        full.extend_from_slice(argv);
        match ToolArgs::try_parse_from(full).expect("arguments parse").command {
            ToolCommand::ErdpyUp(args) => args,
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn modify_path_defaults_to_true() {
        let args = install_args(&[]);

        assert!(args.options().modify_path);
        assert_eq!(args.elrondsdk_path, PathBuf::from("~/elrondsdk"));
    }

    #[test]
    fn last_path_flag_wins() {
        assert!(!install_args(&["--no-modify-path"]).options().modify_path);
        assert!(
            install_args(&["--no-modify-path", "--modify-path"])
                .options()
                .modify_path
        );
        assert!(
            !install_args(&["--modify-path", "--no-modify-path"])
                .options()
                .modify_path
        );
    }

    #[test]
    fn cleanup_accepts_repeated_networks() {
        let args = ToolArgs::try_parse_from([
            "elrond-assets-tools",
            "cleanup",
            "--network",
            "mainnet",
            "--network",
            "devnet",
            "--dry-run",
        ])
        .expect("arguments parse");

        match args.command {
            ToolCommand::Cleanup(cleanup) => {
                assert_eq!(cleanup.networks, vec!["mainnet", "devnet"]);
                assert!(cleanup.dry_run);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn shell_flag_accepts_known_values_only() {
        assert_eq!(install_args(&["--shell", "zsh"]).shell, Some(Shell::Zsh));
        assert!(ToolArgs::try_parse_from(["elrond-assets-tools", "erdpy-up", "--shell", "fish"])
            .is_err());
    }
}
