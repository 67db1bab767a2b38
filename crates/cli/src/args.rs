//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use archiver_observability::LogFormat;

const LONG_ABOUT: &str = "\
Checks products that carry one of the given tags and archives them when they
don't have enough inventory left in the chosen sales channel.

Intended for Shopify product and inventory export files. The resulting file
should be imported in Shopify admin with 'Overwrite products with matching
handles' enabled for the changes to apply.

Tags, threshold and sales channel are asked for interactively unless given
as flags or in a --config file.";

#[derive(Debug, Parser)]
#[command(name = "catalog-archiver")]
#[command(version, about = "Archive low-stock tagged products from catalog exports")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Product export (CSV)
    pub product_export: PathBuf,

    /// Inventory export (CSV)
    pub inventory_export: PathBuf,

    /// File to write archived products to (CSV)
    pub output_file: PathBuf,

    /// Disqualifying tag; repeat for several
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Minimum stock to not be archived (less than this gets archived)
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Zero-based sales channel index
    #[arg(long)]
    pub channel: Option<usize>,

    /// TOML file with `tags`, `threshold` and `channel`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
