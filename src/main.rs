//! Entry point for elrond-assets-tools.
use std::process::ExitCode;

use clap::Parser;
use elrond_assets_tools::{
    cli::{ParsedCommand, ToolArgs},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = ToolArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Cleanup(profile) => runtime::run_cleanup_command(profile).await,
        ParsedCommand::Install(config) => runtime::run_install_command(config).await,
    }
}
