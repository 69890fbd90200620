//! Support library for the cumulo CLI binary.
//!
//! Re-exports the CLI module so doctests and integration tests can exercise
//! the pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
