//! Suite registration and the run entry points.

use std::panic;

use crate::config::RunConfig;
use crate::engine::Engine;
use crate::error::RegistrationError;
use crate::report::Report;
use crate::suite::{Suite, SuiteBuilder};

/// The suites described for one run.
///
/// Build one per run; suites never leak between registries.
#[derive(Debug, Default)]
pub struct Registry {
    suites: Vec<Suite>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes a suite. `register` only records behaviours; nothing runs yet.
    pub fn describe<F>(
        &mut self,
        name: impl Into<String>,
        register: F,
    ) -> Result<&mut Self, RegistrationError>
    where
        F: FnOnce(&mut SuiteBuilder),
    {
        let mut builder = SuiteBuilder::new(name);
        register(&mut builder);
        self.suites.push(builder.finish()?);
        Ok(self)
    }

    /// Described suites, in registration order.
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Runs every suite and collects their reports in registration order.
    ///
    /// With more than one worker thread, suites run concurrently in batches;
    /// each report is still placed by its suite's index.
    pub fn run(&self, config: &RunConfig) -> Report {
        let engine = Engine::new(config);
        let threads = config.worker_threads();
        let mut report = Report::new();

        if threads <= 1 || self.suites.len() <= 1 {
            for suite in &self.suites {
                report.add(engine.run_suite(suite));
            }
            return report;
        }

        let engine = &engine;
        for batch in self.suites.chunks(threads) {
            std::thread::scope(|scope| {
                let handles: Vec<_> = batch
                    .iter()
                    .map(|suite| scope.spawn(move || engine.run_suite(suite)))
                    .collect();
                for handle in handles {
                    match handle.join() {
                        Ok(suite_report) => report.add(suite_report),
                        Err(payload) => panic::resume_unwind(payload),
                    }
                }
            });
        }
        report
    }
}

/// A unit whose behaviour is described by one or more suites.
pub trait Described {
    fn describe(registry: &mut Registry) -> Result<(), RegistrationError>;
}

/// Runs only the suites described by `T`, with the default config.
pub fn run_only<T: Described>() -> Result<Report, RegistrationError> {
    run_only_with::<T>(&RunConfig::default())
}

/// Runs only the suites described by `T` under `config`.
pub fn run_only_with<T: Described>(config: &RunConfig) -> Result<Report, RegistrationError> {
    let mut registry = Registry::new();
    T::describe(&mut registry)?;
    Ok(registry.run(config))
}
