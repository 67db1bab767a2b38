//! `catalog-archiver` command-line front end.
//!
//! Gathers operator parameters (flags, config file or prompts) and hands them
//! to the archive pipeline in `archiver-infra`.

pub mod app;
pub mod args;
pub mod config;
pub mod exit_codes;
pub mod prompt;

pub use args::Cli;
pub use exit_codes::ExitCode;
