//! Operator parameters from flags and an optional TOML file.
//!
//! Resolution is per value: flag, then file, then interactive prompt.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use archiver_core::{ArchiverError, ArchiverResult};

use crate::args::Cli;

/// Contents of a `--config` file. Every key is optional.
///
/// ```toml
/// tags = ["clearance", "last-chance"]
/// threshold = 5
/// channel = 0
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub tags: Option<Vec<String>>,
    pub threshold: Option<i64>,
    pub channel: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> ArchiverResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ArchiverError::config(format!("failed to read config file '{}': {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            ArchiverError::config(format!("invalid config file '{}': {e}", path.display()))
        })
    }

    pub fn parse(content: &str) -> ArchiverResult<Self> {
        toml::from_str(content).map_err(|e| ArchiverError::config(format!("invalid config: {e}")))
    }
}

/// Parameters known before prompting; `None` means "ask the operator".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub tags: Option<Vec<String>>,
    pub threshold: Option<i64>,
    pub channel: Option<usize>,
}

impl Overrides {
    /// Combine command-line flags with the optional config file.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let flag_tags = (!cli.tags.is_empty()).then(|| cli.tags.clone());
        Self {
            tags: flag_tags.or(file.tags),
            threshold: cli.threshold.or(file.threshold),
            channel: cli.channel.or(file.channel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["catalog-archiver", "p.csv", "i.csv", "o.csv"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn parses_full_file() {
        let file = FileConfig::parse("tags = [\"clearance\", \"sale\"]\nthreshold = 5\nchannel = 1\n").unwrap();
        assert_eq!(
            file,
            FileConfig {
                tags: Some(vec!["clearance".into(), "sale".into()]),
                threshold: Some(5),
                channel: Some(1),
            }
        );
    }

    #[test]
    fn empty_file_sets_nothing() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FileConfig::parse("treshold = 5").unwrap_err();
        assert!(matches!(err, ArchiverError::Config(_)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(FileConfig::parse("threshold = \"five\"").is_err());
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = FileConfig::load(Path::new("/no/such/archiver.toml")).unwrap_err();
        assert!(matches!(err, ArchiverError::Config(_)));
    }

    #[test]
    fn flags_take_precedence_over_file() {
        let file = FileConfig {
            tags: Some(vec!["from-file".into()]),
            threshold: Some(9),
            channel: Some(2),
        };
        let overrides = Overrides::resolve(&cli(&["--tag", "from-flag", "--threshold", "1"]), file);

        assert_eq!(overrides.tags, Some(vec!["from-flag".to_string()]));
        assert_eq!(overrides.threshold, Some(1));
        assert_eq!(overrides.channel, Some(2));
    }

    #[test]
    fn unset_values_stay_unresolved() {
        let overrides = Overrides::resolve(&cli(&[]), FileConfig::default());
        assert_eq!(overrides, Overrides::default());
    }
}
