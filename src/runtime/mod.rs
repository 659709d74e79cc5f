//! Command dispatch and process exit handling.
mod startup;

pub use startup::{run_cleanup_command, run_install_command, RuntimeExit, CLOSING_MESSAGE};
