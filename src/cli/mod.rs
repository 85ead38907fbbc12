//! Command Line Interface (CLI) layer for the retrieval launcher.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) wiring user-provided options to
//! the library functionality exposed via `prt_retrieve::api`.
//!
//! If you are embedding the launcher into another application, prefer the
//! high-level `prt_retrieve::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
