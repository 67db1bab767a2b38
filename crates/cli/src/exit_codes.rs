//! Exit codes for the catalog-archiver CLI.
//!
//! Usage errors (code 2) are reported by clap before any of this runs.

use archiver_core::ArchiverError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Output written
    Success = 0,

    /// Invalid config file or operator input
    ConfigError = 10,

    /// The exports are malformed or inconsistent
    InputError = 11,

    /// I/O error (unreadable export, unwritable output)
    IoError = 13,
}

impl ExitCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<&ArchiverError> for ExitCode {
    fn from(err: &ArchiverError) -> Self {
        if err.is_operator_error() {
            ExitCode::ConfigError
        } else if err.is_data_error() {
            ExitCode::InputError
        } else {
            ExitCode::IoError
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_u8())
    }
}
