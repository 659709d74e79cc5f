//! Library crate root re-exporting the cleanup and installer modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cleanup;
pub mod cli;
pub mod installer;
pub mod runtime;
