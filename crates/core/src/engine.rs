//! Per-suite execution and outcome classification.

use crate::behaviour::{Behaviour, SpecContext};
use crate::config::RunConfig;
use crate::failure::{capture, SpecFailure, SpecResult};
use crate::report::{SpecificationReport, SuiteReport};
use crate::suite::Suite;

/// Runs the behaviours of one suite, in order, and reports each of them.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    config: &'a RunConfig,
}

impl<'a> Engine<'a> {
    /// An engine running under `config`.
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// One report per selected behaviour, in registration order.
    ///
    /// A suite with nothing to run still produces an (empty) report, but
    /// none of its hooks or fixtures are invoked.
    pub fn run_suite(&self, suite: &Suite) -> SuiteReport {
        let mut report = SuiteReport::new(suite.name());
        let selected: Vec<&Behaviour> = suite
            .behaviours()
            .iter()
            .filter(|b| self.config.selects(b.description()))
            .collect();

        if selected.is_empty() {
            tracing::info!(suite = suite.name(), "no specifications to run");
            return report;
        }

        let initialized = match suite.initializer() {
            Some(initialize) => capture(|| initialize()).map_err(SpecFailure::into_error),
            None => Ok(()),
        };

        for behaviour in selected {
            let result = match &initialized {
                Ok(()) => self.run_behaviour(suite, behaviour),
                Err(failure) => Err(failure.clone()),
            };
            report.add(classify(behaviour.description(), result));
        }

        if let Some(complete) = suite.completer() {
            if let Err(failure) = capture(|| complete()) {
                tracing::warn!(suite = suite.name(), error = %failure, "suite completion failed");
            }
        }

        let failed = report
            .specifications()
            .iter()
            .filter(|s| !s.result().is_success())
            .count();
        tracing::info!(
            suite = suite.name(),
            total = report.specifications().len(),
            failed,
            "suite finished"
        );
        report
    }

    fn run_behaviour(&self, suite: &Suite, behaviour: &Behaviour) -> SpecResult {
        tracing::debug!(
            suite = suite.name(),
            behaviour = behaviour.description(),
            "running specification"
        );
        let ctx = SpecContext::new(self.config.seed);
        suite.fixture().run(behaviour, &ctx)
    }
}

/// Turns the result of one run into its report.
pub fn classify(description: &str, result: SpecResult) -> SpecificationReport {
    match result {
        Ok(()) => SpecificationReport::success(description),
        Err(SpecFailure::Assertion(message)) => SpecificationReport::failure(description, message),
        Err(SpecFailure::Error(message)) => SpecificationReport::error(description, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;

    #[test]
    fn classification_follows_the_failure_kind() {
        assert_eq!(classify("a", Ok(())), SpecificationReport::success("a"));
        assert_eq!(
            classify("a", Err(SpecFailure::assertion("m"))).result(),
            Outcome::Failure
        );
        assert_eq!(
            classify("a", Err(SpecFailure::error("EPIC FAIL"))),
            SpecificationReport::error("a", "EPIC FAIL")
        );
    }
}
