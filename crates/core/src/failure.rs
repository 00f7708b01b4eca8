//! Body results, failure kinds and panic capture.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::report::Outcome;

/// What a specification body, fixture or hook returns.
pub type SpecResult = Result<(), SpecFailure>;

/// Why a specification did not succeed.
///
/// Any `std::error::Error` converts into [`SpecFailure::Error`], so `?` can be
/// used freely inside bodies. Assertion failures only come from
/// [`Expect`](crate::Expect) or [`SpecFailure::assertion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecFailure {
    /// An expectation did not hold.
    Assertion(String),
    /// Any other failure: a returned error, a panic, a broken fixture.
    Error(String),
}

impl SpecFailure {
    /// A failed expectation, reported as FAILURE.
    pub fn assertion(message: impl Into<String>) -> Self {
        SpecFailure::Assertion(message.into())
    }

    /// Any other failure, reported as ERROR.
    pub fn error(message: impl Into<String>) -> Self {
        SpecFailure::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            SpecFailure::Assertion(m) | SpecFailure::Error(m) => m,
        }
    }

    /// The outcome this failure is reported as.
    pub fn outcome(&self) -> Outcome {
        match self {
            SpecFailure::Assertion(_) => Outcome::Failure,
            SpecFailure::Error(_) => Outcome::Error,
        }
    }

    /// Fixtures and hooks never fail "by assertion": whatever they return
    /// is an error of the specification they bracket.
    pub(crate) fn into_error(self) -> Self {
        match self {
            SpecFailure::Assertion(m) => SpecFailure::Error(m),
            error => error,
        }
    }

    /// Appends the counterexample to the message, keeping the classification.
    pub(crate) fn with_example(self, example: &str) -> Self {
        let suffix = format!("\nFalsifying example: {}", example);
        match self {
            SpecFailure::Assertion(m) => SpecFailure::Assertion(m + &suffix),
            SpecFailure::Error(m) => SpecFailure::Error(m + &suffix),
        }
    }
}

impl fmt::Display for SpecFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl<E> From<E> for SpecFailure
where
    E: std::error::Error,
{
    fn from(error: E) -> Self {
        SpecFailure::Error(error.to_string())
    }
}

/// Runs `f`, turning a panic into [`SpecFailure::Error`] with the panic message.
///
/// The installed panic hook is left alone and still runs for every caught panic.
pub(crate) fn capture<F>(f: F) -> SpecResult
where
    F: FnOnce() -> SpecResult,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(SpecFailure::Error(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_errors_convert_to_error() {
        fn body() -> SpecResult {
            let _: i32 = "nope".parse()?;
            Ok(())
        }
        let failure = body().unwrap_err();
        assert_eq!(failure.outcome(), Outcome::Error);
        assert_eq!(failure.message(), "invalid digit found in string");
    }

    #[test]
    fn capture_keeps_returned_failures() {
        let result = capture(|| Err(SpecFailure::assertion("nope")));
        assert_eq!(result, Err(SpecFailure::Assertion("nope".into())));
    }

    #[test]
    fn capture_turns_panics_into_errors() {
        assert_eq!(
            capture(|| panic!("EPIC FAIL")),
            Err(SpecFailure::Error("EPIC FAIL".into()))
        );
        let code = 7;
        assert_eq!(
            capture(|| panic!("code {}", code)),
            Err(SpecFailure::Error("code 7".into()))
        );
    }

    #[test]
    fn into_error_reclassifies_assertions() {
        let failure = SpecFailure::assertion("bad").into_error();
        assert_eq!(failure, SpecFailure::Error("bad".into()));
    }

    #[test]
    fn with_example_appends_counterexample() {
        let failure =
            SpecFailure::assertion("\nExpected: is <1>\n     but: was <2>").with_example("\"ab\"");
        assert_eq!(
            failure.message(),
            "\nExpected: is <1>\n     but: was <2>\nFalsifying example: \"ab\""
        );
        assert_eq!(failure.outcome(), Outcome::Failure);
    }
}
