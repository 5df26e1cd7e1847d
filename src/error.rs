//! Failure kinds of a report run.
//!
//! Every fatal condition of the pipeline surfaces as one [`Error`] variant carrying the
//! path involved and the underlying cause. The command layer wraps these into
//! `ohno::AppError` for display.

use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

/// Fatal errors raised while producing a license report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required option was not supplied.
    #[error("missing required option '{option}'")]
    MissingOption {
        /// Name of the option as it appears in the configuration file.
        option: &'static str,
    },

    /// The configuration file could not be read or is invalid.
    #[error("invalid configuration file '{path}': {reason}")]
    Configuration {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// A metadata file could not be read.
    #[error("could not read metadata file '{path}'")]
    ReadMetadata {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// A metadata file is not valid key-value text.
    #[error("could not parse metadata file '{path}'")]
    ParseMetadata {
        path: Utf8PathBuf,
        #[source]
        source: PropertiesError,
    },

    /// A license text file exists on disk but could not be read.
    #[error("could not read license text '{path}'")]
    ReadLicense {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTML template could not be opened or read.
    #[error("HTML template can't be found: {template}")]
    TemplateNotFound {
        template: String,
        #[source]
        source: io::Error,
    },

    /// The output report could not be created, written or persisted.
    #[error("could not write output file '{path}'")]
    Output {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Whether this error was raised while validating configuration, before any
    /// scanning or rendering took place.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingOption { .. } | Self::Configuration { .. })
    }
}

/// A syntax error in key-value (properties) text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct PropertiesError {
    /// 1-based line number where the offending logical entry starts.
    pub line: usize,
    pub message: String,
}

/// Format an error followed by each of its sources, separated by `: `.
pub(crate) fn error_chain(error: &dyn core::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
