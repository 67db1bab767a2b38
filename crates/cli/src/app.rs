//! Wiring: configuration, exports, prompts and the archive pipeline.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::info;

use archiver_core::ArchiverResult;
use archiver_infra::{Exports, RunConfig, RunReport};
use archiver_inventory::SalesChannels;
use archiver_products::ArchivePolicy;

use crate::args::Cli;
use crate::config::{FileConfig, Overrides};
use crate::prompt::Prompter;

/// What a finished run reports back to the operator.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: RunReport,
    pub output: PathBuf,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

/// Fill in the parameters the flags and config file left open, asking in
/// the order channel, tags, threshold.
pub fn resolve_run_config<R: BufRead, W: Write>(
    overrides: Overrides,
    channels: &SalesChannels,
    prompter: &mut Prompter<R, W>,
) -> ArchiverResult<RunConfig> {
    let channel = match overrides.channel {
        Some(channel) => channel,
        None => prompter.sales_channel(channels)?,
    };
    let tags = match overrides.tags {
        Some(tags) => tags,
        None => prompter.disqualifying_tags()?,
    };
    let min_stock = match overrides.threshold {
        Some(threshold) => threshold,
        None => prompter.min_stock()?,
    };

    Ok(RunConfig {
        policy: ArchivePolicy::new(tags, min_stock),
        channel,
    })
}

/// Run the archiver for the parsed command line.
///
/// The output file is only created after every product has been resolved.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> ArchiverResult<RunSummary> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let overrides = Overrides::resolve(cli, file);

    let exports = Exports::load(&cli.product_export, &cli.inventory_export)?;
    let config = resolve_run_config(overrides, &exports.sales_channels(), prompter)?;

    let started_at = Local::now();
    let started = Instant::now();
    info!(
        started_at = %started_at.to_rfc3339(),
        tags = ?config.policy.disqualifying_tags(),
        min_stock = config.policy.min_stock(),
        channel = config.channel,
        "starting archive run"
    );

    let run = exports.archive(&config)?;
    run.write(&cli.output_file)?;

    Ok(RunSummary {
        report: run.report().clone(),
        output: cli.output_file.clone(),
        started_at,
        elapsed: started.elapsed(),
    })
}

pub fn print_summary<W: Write>(out: &mut W, summary: &RunSummary) -> std::io::Result<()> {
    let report = &summary.report;
    writeln!(
        out,
        "Archived {} of {} product row(s) using sales channel {} ({})",
        report.archived,
        report.products_read,
        report.channel.index(),
        report.channel.label()
    )?;
    if report.duplicates_skipped > 0 {
        writeln!(
            out,
            "Skipped {} repeated handle(s)",
            report.duplicates_skipped
        )?;
    }
    writeln!(out, "Output written to {}", summary.output.display())?;
    writeln!(
        out,
        "Task started @ {}, took {} milliseconds",
        summary.started_at.format("%Y-%m-%d %H:%M:%S"),
        summary.elapsed.as_millis()
    )
}
