use std::process::ExitCode;

use anyhow::{Context, Error};
use tracing::{error, info};

use crate::{
    cli::{execute_cleanup, CleanupProfile},
    installer::{run_install, InstallerConfig, SystemPythonHost, TerminalInteraction},
    lib::telemetry::RunSpan,
};

/// Printed after a successful installation.
pub const CLOSING_MESSAGE: &str = "For more information go to https://docs.elrond.com.\nFor support, please contact us at https://t.me/ElrondDevelopers.";

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        error!(target: "elrond_assets_tools::runtime", "{}", self.message);
        self.exit_code
    }
}

/// Prune token directories and print the JSON summary on stdout.
pub async fn run_cleanup_command(profile: CleanupProfile) -> Result<(), RuntimeExit> {
    let payload = execute_cleanup(profile)
        .await
        .map_err(RuntimeExit::from_error)?;
    println!("{payload}");
    Ok(())
}

/// Run the installer on a blocking thread; prompts and subprocesses block.
pub async fn run_install_command(config: InstallerConfig) -> Result<(), RuntimeExit> {
    let subject = config.layout.root().display().to_string();
    let run = RunSpan::start("install", &subject);
    let span = run.span().clone();

    let result = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        run_install(&config, &SystemPythonHost::default(), &TerminalInteraction)
    })
    .await
    .context("installer thread panicked")
    .map_err(RuntimeExit::from_error)?;

    match result {
        Ok(summary) => {
            run.finish("ok");
            info!(
                target: "elrond_assets_tools::installer",
                python_version = %summary.host.python_version,
                operating_system = %summary.host.operating_system,
                migration = ?summary.migration,
                profile = ?summary.profile,
                "\n\n{CLOSING_MESSAGE}\n"
            );
            Ok(())
        }
        Err(err) => {
            run.finish("error");
            Err(RuntimeExit::from_error(err))
        }
    }
}
