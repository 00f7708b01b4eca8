//! Errors raised while describing suites, loading configs and reading reports.

use std::path::PathBuf;

use crate::report::Outcome;

/// Problems found while describing suites, before anything runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A generated specification must draw at least one example.
    #[error("suite '{suite}': '{description}' requires at least one example, got {count}")]
    InvalidIterationCount {
        suite: String,
        description: String,
        count: usize,
    },

    /// A data table was given no rows, so it would register nothing.
    #[error("suite '{suite}': data table '{template}' has no rows")]
    EmptyTable { suite: String, template: String },
}

/// Errors loading a [`RunConfig`](crate::RunConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config text is not valid TOML for a run config.
    #[error("invalid run config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A serialized [`SpecificationReport`](crate::SpecificationReport) that
/// breaks the message rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// A successful report carries a message.
    #[error("'{description}' succeeded but carries a message")]
    UnexpectedMessage { description: String },

    /// A failed or errored report has no message.
    #[error("'{description}' is {result} but has no message")]
    MissingMessage { description: String, result: Outcome },
}
