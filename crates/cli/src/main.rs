use std::io;

use anyhow::Context;
use clap::Parser;

use archiver_cli::app;
use archiver_cli::prompt::Prompter;
use archiver_cli::{Cli, ExitCode};
use archiver_core::ArchiverError;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    archiver_observability::init(cli.log_format.into());

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let result = app::execute(&cli, &mut prompter)
        .with_context(|| format!("archiving products from {}", cli.product_export.display()));

    match result {
        Ok(summary) => {
            if let Err(e) = app::print_summary(&mut io::stdout(), &summary) {
                tracing::warn!(error = %e, "failed to print run summary");
            }
            ExitCode::Success.into()
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            err.downcast_ref::<ArchiverError>()
                .map(ExitCode::from)
                .unwrap_or(ExitCode::IoError)
                .into()
        }
    }
}
