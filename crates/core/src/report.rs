//! Three-level run reports: [`Report`] → [`SuiteReport`] → [`SpecificationReport`].
//!
//! Every type here compares structurally so tests can build the report
//! they expect and compare it (or check containment) against what a run
//! produced.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Outcome of one specification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Every assertion (and every generated example) passed.
    Success,
    /// An expectation did not hold.
    Failure,
    /// Anything else went wrong: a returned error, a panic, a broken fixture.
    Error,
}

impl Outcome {
    /// Only [`Outcome::Success`] passes.
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Success => "SUCCESS",
            Outcome::Failure => "FAILURE",
            Outcome::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Result of running a single behaviour.
///
/// `message` is present exactly when the outcome is not a success; the
/// constructors are the only way to build one, and deserialization goes
/// through the same check. An empty failure message becomes
/// [`NO_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpecificationReport")]
pub struct SpecificationReport {
    description: String,
    result: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Stands in for a failure or error that was given no text.
pub const NO_MESSAGE: &str = "(no message)";

#[derive(Deserialize)]
struct RawSpecificationReport {
    description: String,
    result: Outcome,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<RawSpecificationReport> for SpecificationReport {
    type Error = ReportError;

    fn try_from(raw: RawSpecificationReport) -> Result<Self, Self::Error> {
        match (raw.result, raw.message) {
            (Outcome::Success, None) => Ok(Self::success(raw.description)),
            (Outcome::Success, Some(_)) => Err(ReportError::UnexpectedMessage {
                description: raw.description,
            }),
            (Outcome::Failure, Some(message)) => Ok(Self::failure(raw.description, message)),
            (Outcome::Error, Some(message)) => Ok(Self::error(raw.description, message)),
            (result, None) => Err(ReportError::MissingMessage {
                description: raw.description,
                result,
            }),
        }
    }
}

fn non_empty(message: String) -> String {
    if message.is_empty() {
        NO_MESSAGE.to_string()
    } else {
        message
    }
}

impl SpecificationReport {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            result: Outcome::Success,
            message: None,
        }
    }

    pub fn failure(description: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            result: Outcome::Failure,
            message: Some(non_empty(message.into())),
        }
    }

    pub fn error(description: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            result: Outcome::Error,
            message: Some(non_empty(message.into())),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn result(&self) -> Outcome {
        self.result
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Reports for every behaviour of one suite, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    name: String,
    specifications: Vec<SpecificationReport>,
}

impl SuiteReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifications: Vec::new(),
        }
    }

    pub fn add(&mut self, specification: SpecificationReport) {
        self.specifications.push(specification);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specifications(&self) -> &[SpecificationReport] {
        &self.specifications
    }

    /// Partial match: same name, and every report in `expected` appears
    /// somewhere in `self`. Order and extra reports are ignored.
    pub fn contains(&self, expected: &SuiteReport) -> bool {
        self.name == expected.name
            && expected
                .specifications
                .iter()
                .all(|spec| self.specifications.contains(spec))
    }
}

/// The full result of a run, one [`SuiteReport`] per described suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    suites: Vec<SuiteReport>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, suite: SuiteReport) {
        self.suites.push(suite);
    }

    pub fn suites(&self) -> &[SuiteReport] {
        &self.suites
    }

    pub fn suite(&self, name: &str) -> Option<&SuiteReport> {
        self.suites.iter().find(|s| s.name == name)
    }

    /// True if any suite in the report [`contains`](SuiteReport::contains) `expected`.
    pub fn contains(&self, expected: &SuiteReport) -> bool {
        self.suites.iter().any(|s| s.contains(expected))
    }

    /// Every specification report with the suite it belongs to, in order.
    pub fn specifications(&self) -> impl Iterator<Item = (&SuiteReport, &SpecificationReport)> {
        self.suites
            .iter()
            .flat_map(|suite| suite.specifications.iter().map(move |spec| (suite, spec)))
    }

    /// Counts every report per outcome.
    pub fn summary(&self) -> Summary<'_> {
        let mut summary = Summary {
            report: self,
            total: 0,
            successes: 0,
            failures: 0,
            errors: 0,
        };
        for (_, spec) in self.specifications() {
            summary.total += 1;
            match spec.result {
                Outcome::Success => summary.successes += 1,
                Outcome::Failure => summary.failures += 1,
                Outcome::Error => summary.errors += 1,
            }
        }
        summary
    }
}

/// Outcome counts over a [`Report`].
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    report: &'a Report,
    /// Every specification report in the run.
    pub total: usize,
    /// Reports with [`Outcome::Success`].
    pub successes: usize,
    /// Reports with [`Outcome::Failure`].
    pub failures: usize,
    /// Reports with [`Outcome::Error`].
    pub errors: usize,
}

impl Summary<'_> {
    pub fn all_passed(&self) -> bool {
        self.successes == self.total
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} passed ({} failed, {} errored)",
            self.successes, self.total, self.failures, self.errors
        )?;
        for (suite, spec) in self.report.specifications() {
            if !spec.result.is_success() {
                writeln!(
                    f,
                    "  {} [{} / {}]: {}",
                    spec.result,
                    suite.name,
                    spec.description,
                    spec.message.as_deref().unwrap_or(NO_MESSAGE).trim()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite_with(name: &str, specs: Vec<SpecificationReport>) -> SuiteReport {
        let mut suite = SuiteReport::new(name);
        for spec in specs {
            suite.add(spec);
        }
        suite
    }

    #[test]
    fn message_present_only_for_non_success() {
        assert_eq!(SpecificationReport::success("a").message(), None);
        assert_eq!(SpecificationReport::failure("a", "m").message(), Some("m"));
        assert_eq!(SpecificationReport::error("a", "m").result(), Outcome::Error);
    }

    #[test]
    fn empty_messages_get_a_placeholder() {
        assert_eq!(SpecificationReport::failure("a", "").message(), Some(NO_MESSAGE));
        assert_eq!(SpecificationReport::error("a", "").message(), Some(NO_MESSAGE));
    }

    #[test]
    fn contains_ignores_extra_specifications() {
        let actual = suite_with(
            "suite",
            vec![
                SpecificationReport::success("one"),
                SpecificationReport::error("two", "boom"),
            ],
        );
        let expected = suite_with("suite", vec![SpecificationReport::error("two", "boom")]);
        assert!(actual.contains(&expected));
        assert!(actual.contains(&SuiteReport::new("suite")));
        assert_ne!(actual, expected);
    }

    #[test]
    fn contains_requires_matching_name_and_message() {
        let actual = suite_with("suite", vec![SpecificationReport::error("two", "boom")]);
        assert!(!actual.contains(&SuiteReport::new("other")));
        let wrong_message = suite_with("suite", vec![SpecificationReport::error("two", "bang")]);
        assert!(!actual.contains(&wrong_message));
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = suite_with(
            "s",
            vec![
                SpecificationReport::success("one"),
                SpecificationReport::success("two"),
            ],
        );
        let b = suite_with(
            "s",
            vec![
                SpecificationReport::success("two"),
                SpecificationReport::success("one"),
            ],
        );
        assert_ne!(a, b);
        assert!(a.contains(&b));
    }

    #[test]
    fn summary_counts_and_renders_non_successes() {
        let mut report = Report::new();
        report.add(suite_with(
            "numbers",
            vec![
                SpecificationReport::success("adds"),
                SpecificationReport::failure("subtracts", "\nExpected: is <1>\n     but: was <2>"),
                SpecificationReport::error("divides", "EPIC FAIL"),
            ],
        ));
        report.add(SuiteReport::new("empty"));

        let summary = report.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successes, 1);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.errors, 1);
        assert!(!summary.all_passed());

        let text = summary.to_string();
        assert!(text.starts_with("1/3 passed (1 failed, 1 errored)\n"));
        assert!(text.contains("ERROR [numbers / divides]: EPIC FAIL"));
        assert!(!text.contains("adds"));
    }

    #[test]
    fn empty_report_has_passed() {
        assert!(Report::new().summary().all_passed());
    }
}
