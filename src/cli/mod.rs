//! Command Line Interface (CLI) layer for listrun.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that streams a command script
//! through the interpreter, writing results to stdout and diagnostics to
//! stderr.
//!
//! If you are embedding listrun into another application, prefer using
//! the high-level `listrun::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
