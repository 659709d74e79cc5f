//! Telemetry initialization and run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a cleanup or install run.
pub struct RunSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
    run_kind: &'static str,
}

impl RunSpan {
    /// Start a run span.
    pub fn start(run_kind: &'static str, subject: &str) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "elrond_assets_tools::run",
            "run",
            %run_id,
            run_kind,
            subject
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
            run_kind,
        }
    }

    /// Span to enter while the run is in progress.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "elrond_assets_tools::run",
            run_id = %self.run_id,
            run_kind = self.run_kind,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed run"
        );
    }
}

/// Log a framed multi-line notice for the person running the tool.
pub fn emit_banner(message: &str) {
    info!(
        target: "elrond_assets_tools::installer",
        "\n###############################################################################\n{message}\n###############################################################################"
    );
}
