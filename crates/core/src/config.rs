//! Run configuration: seed, worker threads and description filter.

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Seed used when none is configured, so repeated runs draw the same examples.
pub const DEFAULT_SEED: u64 = 0x5EED_BE4A;

/// Knobs for one run of a [`Registry`](crate::Registry).
///
/// ```toml
/// seed = 42
/// threads = 4     # 0 = one per available core
/// filter = "reverse"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Seed for every generated specification's example source.
    pub seed: u64,
    /// How many suites may run at once. `1` runs them in order on the
    /// calling thread, `0` uses one worker per available core.
    pub threads: usize,
    /// When set, only behaviours whose description contains this text run.
    pub filter: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            threads: 1,
            filter: None,
        }
    }
}

impl RunConfig {
    /// Parses a config from TOML; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Seed for every behaviour's [`Source`](crate::Source).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// `1` runs suites one after another, `0` uses one worker per core.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Only behaviours whose description contains `filter` run.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub(crate) fn selects(&self, description: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| description.contains(filter))
    }

    pub(crate) fn worker_threads(&self) -> usize {
        match self.threads {
            0 => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            n => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default() {
        assert_eq!(RunConfig::from_toml_str("").unwrap(), RunConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let text = "seed = 7\nthreads = 0\nfilter = \"rev\"\n";
        let config = RunConfig::from_toml_str(text).unwrap();
        let expected = RunConfig::default()
            .with_seed(7)
            .with_threads(0)
            .with_filter("rev");
        assert_eq!(config, expected);
        assert!(config.worker_threads() >= 1);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = RunConfig::from_toml_str("sead = 7").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid run config:"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RunConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn filter_selects_by_substring() {
        let config = RunConfig::default().with_filter("twice");
        assert!(config.selects("reversing a String twice"));
        assert!(!config.selects("have a single spec"));
        assert!(RunConfig::default().selects("anything"));
    }
}
